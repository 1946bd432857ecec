use crate::cli::CmdStartArgs;
use crate::prelude::*;

const EXAMPLES: &str = r#"Examples:

  1. Start the container with the default workspace:
     devc start

  2. Start the container with a custom workspace mount:
     devc start --mount /path/to/your/workspace

  3. View help for the 'start' command:
     devc start --help
"#;

pub fn start_container(ctx: &Context, cli_args: CmdStartArgs) -> Result<()> {
    if cli_args.examples {
        print!("{}", EXAMPLES);
        return Ok(());
    }

    println!("Starting the container with workspace mount: {}", cli_args.mount.display());

    ctx.lifecycle().start(&cli_args.mount)?;

    println!("Container started successfully.");

    Ok(())
}
