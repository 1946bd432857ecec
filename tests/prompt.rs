//! Interactive prompts ran inside a pseudo terminal

mod common;

use common::prelude::*;
use rexpect::session::spawn_command;

#[test]
fn test_cleanup_prompt_defaults_to_no() -> Result<()> {
    let engine = FakeEngine::new()?;

    let mut pty = {
        let mut c = engine.devc_std()?;
        c.args(["cleanup", "--all", "--volumes"]);

        spawn_command(c, Some(5_000))
    }?;

    pty.exp_string("Do you want to proceed? [y/N]")?;

    // send enter so the default action is checked
    pty.send_line("")?;
    pty.exp_string("Cleanup operation cancelled.")?;
    pty.exp_eof()?;

    assert!(engine.calls().is_empty());

    // run again and answer y
    let mut pty = {
        let mut c = engine.devc_std()?;
        c.args(["cleanup", "--all", "--volumes"]);

        spawn_command(c, Some(5_000))
    }?;

    pty.exp_string("[y/N]")?;
    pty.send_line("y")?;
    pty.exp_string("Cleanup completed successfully.")?;
    pty.exp_eof()?;

    assert_eq!(engine.calls(), vec!["system prune -f --all --volumes"]);

    Ok(())
}

#[test]
fn test_template_prompt_is_per_file() -> Result<()> {
    let engine = FakeEngine::new()?;

    // create all the files first
    engine.devc()?.args(["init", "--setup-template"]).assert().success();

    let dockerfile = engine.path().join("Dockerfile");
    let bashrc = engine.path().join("env/developer_bashrc");
    std::fs::write(&dockerfile, "changed")?;
    std::fs::write(&bashrc, "changed")?;

    let mut pty = {
        let mut c = engine.devc_std()?;
        c.args(["init", "--setup-template"]);

        spawn_command(c, Some(5_000))
    }?;

    // overwrite only the dockerfile
    pty.exp_string("./Dockerfile. Overwrite? [y/N]")?;
    pty.send_line("y")?;
    pty.exp_string("./env/setup_user.sh. Overwrite? [y/N]")?;
    pty.send_line("")?;
    pty.exp_string("./env/setup_tools.sh. Overwrite? [y/N]")?;
    pty.send_line("n")?;
    pty.exp_string("./env/developer_bashrc. Overwrite? [y/N]")?;
    pty.send_line("")?;
    pty.exp_string("Default template setup complete.")?;
    pty.exp_eof()?;

    assert_ne!(std::fs::read_to_string(&dockerfile)?, "changed");
    assert_eq!(std::fs::read_to_string(&bashrc)?, "changed");

    Ok(())
}
