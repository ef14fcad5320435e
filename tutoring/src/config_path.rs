use std::fs;

pub fn get() -> String {
    let config_path = match std::env::var("TC_CONFIG_PATH") {
        Ok(path) => path,
        Err(_) => "config.yml".to_owned(),
    };

    if fs::metadata(&config_path).is_err() {
        tc_log::panic(
            None,
            format!("[Tutoring] Config file {config_path} (TC_CONFIG_PATH or ./config.yml) must exist"),
        );
    }

    config_path
}
