pub mod login_commands;
pub mod scan_commands;
