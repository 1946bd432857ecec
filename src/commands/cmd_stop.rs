use crate::cli::CmdExamplesArgs;
use crate::prelude::*;

const EXAMPLES: &str = r#"Examples:

  1. Stop the container:
     devc stop

  2. View help for the 'stop' command:
     devc stop --help
"#;

pub fn stop_container(ctx: &Context, cli_args: CmdExamplesArgs) -> Result<()> {
    if cli_args.examples {
        print!("{}", EXAMPLES);
        return Ok(());
    }

    println!("Stopping the container: {}...", crate::CONTAINER_NAME);

    ctx.lifecycle().stop()?;

    println!("Container stopped successfully.");

    Ok(())
}
