use crate::domain::ports::ConfigProvider;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "book-tracker")]
#[command(about = "Look up, search and add books in a flat-file catalog")]
pub struct CliConfig {
    /// Only honoured before the catalog file; afterwards `-v` is an ordinary argument
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// <catalogFile.txt> <operation>. The operation is a 13-digit ISBN, a
    /// Title:Author:ISBN:Copies entry, or a title keyword. Everything from the
    /// catalog file on is taken verbatim, including values starting with `-`.
    #[arg(
        value_name = "ARGS",
        num_args = 1..,
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

impl ConfigProvider for CliConfig {
    fn catalog_file(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }

    fn operation(&self) -> Option<&str> {
        self.args.get(1).map(String::as_str)
    }

    fn arguments(&self) -> Vec<&str> {
        self.args.iter().map(String::as_str).collect()
    }
}
