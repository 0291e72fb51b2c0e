use std::error::Error;

use tracing::{debug, info};

use opt_core::{absent, map, present, Optional};
use opt_core::app::env;
use opt_core::app::tracing::AppTracingBuilder;
use opt_core::run_or_compile_time_env;

fn main() -> Result<(), Box<dyn Error>> {
  env::load_dotenv_into_env();
  let log_file = run_or_compile_time_env!("OPT_DEMO_LOG_FILE");
  let log_file = (!log_file.is_empty()).then_some(log_file);
  let _tracing = AppTracingBuilder::default()
    .with_default_directive("opt_core=trace,opt_demo=debug")
    .with_log_file_path_opt(log_file)
    .build();

  present_values()?;
  absent_values();
  mapped_values();
  from_environment()?;

  Ok(())
}

fn present_values() -> Result<(), Box<dyn Error>> {
  info!("present values");
  println!("{}", present(2).get());
  println!("{}", present("test").get_or_else("test2"));
  println!("{}", present(true).get_or_zero());
  println!("{}", present("value").is_empty());
  println!("{}", present(2).try_get()?);
  Ok(())
}

fn absent_values() {
  info!("absent values");
  let name = absent::<String>();
  // `name.get()` would panic here.
  println!("{}", name.is_empty());
  println!("{}", absent::<i32>().get_or_else(3));
  println!("{:?}", name.get_or_zero());
  if let Err(e) = absent::<i32>().try_get() {
    println!("{}", e);
  }
}

fn mapped_values() {
  info!("mapped values");
  let twice = map(|t| t * 2, present(3));
  println!("{}", twice.get());
  let twice = map(|t: i32| t * 2, absent());
  println!("{}", twice.is_empty());
}

fn from_environment() -> Result<(), Box<dyn Error>> {
  info!("values from the environment");
  let name = env_var("OPT_DEMO_NAME").get_or_else("world".to_string());
  println!("hello, {}!", name);

  let port = map(|port| port.parse::<u16>(), env_var("OPT_DEMO_PORT"))
    .get_or_else(Ok(8080))?;
  println!("port {}", port);
  Ok(())
}

fn env_var(name: &str) -> Optional<String> {
  let value: Optional<String> = std::env::var(name).ok().into();
  debug!(name, present = value.is_present(), "read environment variable");
  value
}
