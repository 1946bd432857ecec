use crate::cli::CmdInitArgs;
use crate::prelude::*;
use crate::scaffold::Scaffolder;
use crate::util::StdinConfirm;

const EXAMPLES: &str = r#"Examples:

  1. Build the image using the default Dockerfile:
     devc init

  2. Build the image using a custom Dockerfile:
     devc init --file /path/to/Dockerfile

  3. Set up the default template (Dockerfile and environment scripts):
     devc init --setup-template

  4. Force overwrite existing files when setting up the template:
     devc init --setup-template --force
"#;

pub fn init(ctx: &Context, cli_args: CmdInitArgs) -> Result<()> {
    if cli_args.examples {
        print!("{}", EXAMPLES);
        return Ok(());
    }

    if cli_args.setup_template {
        return setup_template(cli_args.force);
    }

    println!("Building image using Dockerfile at: {}", cli_args.dockerfile.display());

    ctx.lifecycle().build(&cli_args.dockerfile)?;

    println!("Image {:?} built successfully.", crate::IMAGE_TAG);

    Ok(())
}

fn setup_template(force: bool) -> Result<()> {
    println!("Setting up default template...");

    let report = Scaffolder::new(".", force, &StdinConfirm)
        .scaffold()
        .with_context(|| "Failed to set up default template")?;

    for path in &report.written {
        println!("Created: {}", path.display());
    }

    for path in &report.skipped {
        println!("Skipped: {}", path.display());
    }

    println!("Default template setup complete.");

    Ok(())
}
