
use std::env;

use tempfile::TempDir;

pub(crate) const TEST_SECRET: &str = "0123456789abcdef0123456789abcdef";

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory pointed to by CR_CONFIG_DIR, with both secret
/// variables cleared so the host environment can't leak in.
pub(crate) struct TestConfigDir {
    pub(crate) temp: TempDir,
    _guards: Vec<EnvGuard>,
}

impl TestConfigDir {
    pub(crate) fn path(&self) -> &std::path::Path {
        self.temp.path()
    }

    pub(crate) fn write_toml(&self, contents: &str) {
        std::fs::write(self.temp.path().join("config.toml"), contents).unwrap();
    }
}

pub(crate) fn setup_config_dir() -> TestConfigDir {
    let temp = TempDir::new().unwrap();
    let guards = vec![
        EnvGuard::set("CR_CONFIG_DIR", temp.path().to_str().unwrap()),
        EnvGuard::remove("CR_AUTH_JWT_SECRET"),
        EnvGuard::remove("JWT_SECRET"),
    ];
    TestConfigDir {
        temp,
        _guards: guards,
    }
}
