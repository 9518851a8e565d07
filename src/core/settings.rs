use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter, Error, Read},
    net::Ipv4Addr,
};

const SETTINGS_PATH: &str = "core/settings.json";

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Settings {
    pub ipv4_addr: Ipv4Setting,
    pub port: U16Setting,
    pub assets_path: StrSetting,
    pub local_projects_path: StrSetting,
    pub projects_file_name: StrSetting,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StrSetting {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct U16Setting {
    pub name: String,
    pub value: u16,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Ipv4Setting {
    pub name: String,
    pub value: Ipv4Addr,
}

impl Settings {
    /// Reads `core/settings.json`; when missing or malformed the
    /// defaults are used and written back so the file exists for the
    /// next edit.
    pub fn load() -> Self {
        match Self::read_file() {
            Ok(settings) => settings,
            Err(error) => {
                eprintln!("Settings load error: {}", error);
                println!("Falling back to default settings.");
                let settings = Settings::new();
                settings.write_file();
                settings
            }
        }
    }

    fn read_file() -> Result<Self, Error> {
        let file = File::open(SETTINGS_PATH)?;
        let mut buffer = Vec::new();
        let mut reader = BufReader::new(file);
        reader.read_to_end(&mut buffer)?;
        let settings = serde_json::from_slice::<Settings>(&buffer)?;
        Ok(settings)
    }

    fn write_file(&self) {
        let _ = std::fs::create_dir_all("core");
        match File::create(SETTINGS_PATH) {
            Ok(file) => {
                let writer = BufWriter::new(file);
                let _ = serde_json::to_writer_pretty(writer, self);
            }
            Err(error) => eprintln!("Could not write default settings: {}", error),
        }
    }

    pub fn new() -> Self {
        Settings {
            ipv4_addr: Ipv4Setting {
                name: "Ipv4 Address".to_string(),
                value: Ipv4Addr::new(0, 0, 0, 0),
            },
            port: U16Setting {
                name: "Port".to_string(),
                value: 4010,
            },
            assets_path: StrSetting {
                name: "assets_path".to_string(),
                value: "public".to_string(),
            },
            local_projects_path: StrSetting {
                name: "local_projects_path".to_string(),
                value: "data".to_string(),
            },
            projects_file_name: StrSetting {
                name: "projects_file_name".to_string(),
                value: "projects".to_string(),
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.ipv4_addr.value, self.port.value)
    }

    pub fn projects_file(&self) -> String {
        format!(
            "{}/{}.json",
            self.local_projects_path.value, self.projects_file_name.value
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bind_addr_is_well_formed() {
        let settings = Settings::new();
        assert_eq!(settings.bind_addr(), "0.0.0.0:4010");
    }

    #[test]
    fn default_projects_file_path() {
        let settings = Settings::new();
        assert_eq!(settings.projects_file(), "data/projects.json");
    }
}
