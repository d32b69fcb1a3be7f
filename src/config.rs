use std::{env, net::SocketAddr, path::PathBuf};

const DEFAULT_DATA_PATH: &str = "data/habit_data.json";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub addr: SocketAddr,
}

impl AppConfig {
    /// `HABIT_DATA_PATH` and `PORT`, with defaults for anything unset or
    /// unparseable.
    pub fn from_env() -> Self {
        let data_path = env::var_os("HABIT_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            data_path,
            addr: SocketAddr::from(([0, 0, 0, 0], port)),
        }
    }
}
