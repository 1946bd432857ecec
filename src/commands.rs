mod cmd_cd;
mod cmd_cleanup;
mod cmd_completion;
mod cmd_exec;
mod cmd_init;
mod cmd_restart;
mod cmd_start;
mod cmd_status;
mod cmd_stop;

pub use cmd_cd::change_workspace;
pub use cmd_cleanup::cleanup;
pub use cmd_completion::shell_completion;
pub use cmd_exec::container_exec;
pub use cmd_init::init;
pub use cmd_restart::restart_container;
pub use cmd_start::start_container;
pub use cmd_status::print_status;
pub use cmd_stop::stop_container;
