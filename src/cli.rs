use clap::Parser;
use std::ffi::OsString;

#[derive(Parser)]
#[command(
    name = "fruits",
    about = "Print the food display line",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Cli {
    #[arg(
        num_args = 0..,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub ignored: Vec<OsString>,
}
