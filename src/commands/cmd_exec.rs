use crate::cli::CmdExecArgs;
use crate::prelude::*;
use crate::workspace;

const EXAMPLES: &str = r#"Examples:

  1. Execute a shell command inside the container:
     devc exec ls -la

  2. Start an interactive Bash session:
     devc exec bash

Note: The current workspace path is determined by the DEVC_WORKSPACE_PATH environment variable.
      To set the workspace path, use `devc cd <path>`.
"#;

pub fn container_exec(ctx: &Context, cli_args: CmdExecArgs) -> Result<()> {
    if cli_args.examples {
        print!("{}", EXAMPLES);
        return Ok(());
    }

    let ws_dir = workspace::resolve();
    println!("Executing command in workspace: {}", ws_dir);

    ctx.lifecycle().exec(&ws_dir, &cli_args.command.join(" "))?;
    println!("Command executed successfully.");

    Ok(())
}
