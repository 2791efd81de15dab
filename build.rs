use std::env;
use std::fs;
use std::path::Path;

// Solo las claves del traductor llegan a option_env!()
const KEY_PREFIX: &str = "TRANSLATOR_";

fn main() {
    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                // Ignorar comentarios y líneas vacías
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                // Parsear KEY=VALUE
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    if !key.starts_with(KEY_PREFIX) {
                        continue;
                    }

                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    }

    for key in [
        "TRANSLATOR_SCRIPT_URL",
        "TRANSLATOR_CALLBACK_PREFIX",
        "TRANSLATOR_SCRIPT_MAX_ATTEMPTS",
        "TRANSLATOR_SCRIPT_RETRY_DELAY_MS",
        "TRANSLATOR_SETTLE_DELAY_MS",
        "TRANSLATOR_SUPPRESS_DELAY_MS",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
    println!("cargo:rerun-if-changed=build.rs");
}
