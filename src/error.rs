use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Could not read puzzle input from stdin")]
    Stdin(#[source] std::io::Error),
}
