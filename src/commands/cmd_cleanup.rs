use crate::cli::CmdCleanupArgs;
use crate::lifecycle::{CleanupOutcome, PruneScope};
use crate::prelude::*;
use crate::util::{AlwaysConfirm, Confirm, StdinConfirm};

const EXAMPLES: &str = r#"Examples:

  1. Clean up dangling images, containers, and networks:
     devc cleanup

  2. Clean up all unused resources, including volumes:
     devc cleanup --all --volumes

  3. Force cleanup without confirmation:
     devc cleanup --force
"#;

pub fn cleanup(ctx: &Context, cli_args: CmdCleanupArgs) -> Result<()> {
    if cli_args.examples {
        print!("{}", EXAMPLES);
        return Ok(());
    }

    let confirm: &dyn Confirm = if cli_args.force {
        &AlwaysConfirm
    } else {
        &StdinConfirm
    };

    let scope = PruneScope {
        all: cli_args.all,
        volumes: cli_args.volumes,
    };

    match ctx.lifecycle().cleanup(scope, confirm)? {
        CleanupOutcome::Pruned => println!("Cleanup completed successfully."),
        CleanupOutcome::Cancelled => println!("Cleanup operation cancelled."),
    }

    Ok(())
}
