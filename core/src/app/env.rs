use std::io::ErrorKind;

/// Loads variables from a `.env` file in the current directory or its parents into the process
/// environment. Variables that are already set are kept. A missing file is not an error.
pub fn load_dotenv_into_env() {
  match dotenvy::dotenv() {
    Ok(_) => {}
    Err(dotenvy::Error::Io(e)) if e.kind() == ErrorKind::NotFound => {}
    Err(e) => eprintln!("Cannot load environment variables from '.env' file: {}", e),
  }
}

/// Gets the value of environment variable `name` at run time, falling back to its value at compile time,
/// falling back to an empty string.
pub fn run_or_compile_time_env(name: &str, compile_time: Option<&'static str>) -> String {
  std::env::var(name)
    .ok()
    .or_else(|| compile_time.map(ToOwned::to_owned))
    .unwrap_or_default()
}

#[macro_export]
macro_rules! run_or_compile_time_env {
  ($name:literal) => {
    $crate::app::env::run_or_compile_time_env($name, option_env!($name))
  };
}
