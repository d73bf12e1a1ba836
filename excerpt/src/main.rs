use std::process::ExitCode;

use excerpt_driver::{Argument, Parser};

fn main() -> ExitCode {
    let argument = Argument::parse();
    excerpt_driver::run(argument)
}
