use crate::cli::CmdCdArgs;
use crate::prelude::*;
use crate::workspace;

const EXAMPLES: &str = r#"Examples:

  1. Change to a subdirectory inside the container workspace:
     devc cd subdirectory

  2. Change to the root workspace directory:
     devc cd /home/developer/workspace

After running 'cd', persist the workspace path by executing:
  eval "$(devc cd <path>)"
"#;

/// Prints the export statement on stdout so the output can be evaluated by the shell
pub fn change_workspace(cli_args: CmdCdArgs) -> Result<()> {
    if cli_args.examples {
        print!("{}", EXAMPLES);
        return Ok(());
    }

    let statement = workspace::publish(&cli_args.path)?;

    eprintln!("To set the active workspace path, run the following command in your shell:");
    println!("{}", statement);

    Ok(())
}
