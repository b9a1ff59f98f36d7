//! Locating the installed dictionary.
use std::env;
use std::path::PathBuf;
use std::process::Command;

/// Environment variable naming a dictionary directory directly.
pub const DICT_PATH_ENV: &str = "RUMORPH_DICT_PATH";

const PYTHON_COMMANDS: [&str; 2] = ["python3", "python"];
const PYTHON_SNIPPET: &str = "import pymorphy2_dicts_ru as p; print(p.__path__[0])";

/// Finds the dictionary directory: `RUMORPH_DICT_PATH` if set, otherwise the
/// `data` directory of the `pymorphy2_dicts_ru` Python package.
pub fn find_dictionary_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(DICT_PATH_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    PYTHON_COMMANDS.iter().find_map(|python| {
        let output = Command::new(python)
            .args(["-c", PYTHON_SNIPPET])
            .output()
            .ok()?;
        if !output.status.success() {
            log::debug!("{} could not import pymorphy2_dicts_ru", python);
            return None;
        }
        package_data_dir(&String::from_utf8_lossy(&output.stdout))
    })
}

fn package_data_dir(stdout: &str) -> Option<PathBuf> {
    let package = stdout.trim_end_matches(&['\r', '\n'][..]);
    if package.is_empty() {
        return None;
    }
    Some(PathBuf::from(package).join("data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_inside_the_package() {
        assert_eq!(
            package_data_dir("/usr/lib/python3/site-packages/pymorphy2_dicts_ru\n"),
            Some(PathBuf::from(
                "/usr/lib/python3/site-packages/pymorphy2_dicts_ru/data"
            ))
        );
        assert_eq!(
            package_data_dir("C:\\py\\pymorphy2_dicts_ru\r\n"),
            Some(PathBuf::from("C:\\py\\pymorphy2_dicts_ru").join("data"))
        );
        assert_eq!(package_data_dir("\n"), None);
        assert_eq!(package_data_dir(""), None);
    }
}
