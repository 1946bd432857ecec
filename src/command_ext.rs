use std::process::{Command, ExitStatus};

/// Simple extension trait to avoid duplicating code, allow easy conversion to exit code
pub trait CommandOutputExt {
    /// Get exit code as `u8` consistently
    ///
    /// Equal to `1` in case of signal termination (or any exit code larger than 255)
    fn get_code(&self) -> u8;
}

impl CommandOutputExt for ExitStatus {
    fn get_code(&self) -> u8 {
        // the unwrap_or(1) s are cause even if conversion fails it still failed just termination
        // by signal is larger than 255 that u8 exit code on unix allows
        TryInto::<u8>::try_into(self.code().unwrap_or(1)).unwrap_or(1)
    }
}

pub trait CommandExt {
    /// Returns the command with all the arguments as a `String`
    fn get_full_command(&self) -> String;

    /// Prints the command in readable and copy-able format
    fn print_escaped_cmd(&self);

    /// Logs command and output after running `Command::status`
    fn log_status(&mut self) -> std::io::Result<ExitStatus>;
}

impl CommandExt for Command {
    fn get_full_command(&self) -> String {
        let mut parts = vec![self.get_program().to_string_lossy().to_string()];
        parts.extend(self.get_args().map(|x| x.to_string_lossy().to_string()));

        parts.join(" ")
    }

    /// Print the whole command with quotes around each argument
    fn print_escaped_cmd(&self) {
        println!("(CMD) {:?} \\", self.get_program().to_string_lossy());
        let mut iter = self.get_args();
        while let Some(arg) = iter.next() {
            print!("      {:?}", arg.to_string_lossy());

            // do not add backslash on the last argument
            if iter.len() != 0 {
                print!(" \\");
            }

            println!();
        }
    }

    fn log_status(&mut self) -> std::io::Result<ExitStatus> {
        let status = self.status();

        match status.as_ref() {
            Ok(status) => log::debug!(
                "Command {:?} (status)\n  STATUS: {:?}",
                self.get_full_command(),
                status,
            ),
            Err(err) => log::debug!(
                "Command {:?} (status)\n  ERROR {:?}",
                self.get_full_command(),
                err,
            ),
        }

        status
    }
}
