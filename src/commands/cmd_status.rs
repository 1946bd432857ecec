use crate::cli::CmdExamplesArgs;
use crate::prelude::*;

const EXAMPLES: &str = r#"Examples:

  1. Check the status of the container:
     devc status

  2. View help for the 'status' command:
     devc status --help
"#;

/// Prints engine listing of the container, nothing listed means it does not exist
pub fn print_status(ctx: &Context, cli_args: CmdExamplesArgs) -> Result<()> {
    if cli_args.examples {
        print!("{}", EXAMPLES);
        return Ok(());
    }

    println!("Checking the status of the container: {}...", crate::CONTAINER_NAME);

    ctx.lifecycle().status()?;

    Ok(())
}
