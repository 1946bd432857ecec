use crate::cli::CmdExamplesArgs;
use crate::prelude::*;

const EXAMPLES: &str = r#"Examples:

  1. Restart the container:
     devc restart

  2. View help for the 'restart' command:
     devc restart --help
"#;

pub fn restart_container(ctx: &Context, cli_args: CmdExamplesArgs) -> Result<()> {
    if cli_args.examples {
        print!("{}", EXAMPLES);
        return Ok(());
    }

    println!("Restarting the container: {}...", crate::CONTAINER_NAME);

    ctx.lifecycle().restart()?;

    println!("Container restarted successfully.");

    Ok(())
}
