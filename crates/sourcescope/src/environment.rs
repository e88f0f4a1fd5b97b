use sourcescope_project::ScopeOverrides;

pub(crate) const IMPORT_PREFIX_VAR: &str = "SOURCESCOPE_IMPORT_PREFIX";
pub(crate) const BASE_VAR: &str = "SOURCESCOPE_BASE";

/// Overrides taken from the process environment. Empty values are treated as unset.
pub(crate) fn env_overrides() -> ScopeOverrides {
    ScopeOverrides {
        import_prefix: non_empty_var(IMPORT_PREFIX_VAR),
        base: non_empty_var(BASE_VAR),
        ..ScopeOverrides::default()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const ALL_VARS: &[&str] = &[IMPORT_PREFIX_VAR, BASE_VAR];

    fn with_env<F, R>(vars: &[(&str, &str)], f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let _guard = ENV_MUTEX.lock().expect("mutex poisoned");

        let mut old_values: Vec<(&str, Option<String>)> = Vec::new();

        for var in ALL_VARS {
            old_values.push((var, std::env::var(var).ok()));
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            unsafe { std::env::remove_var(var) };
        }

        for (key, value) in vars {
            // SAFETY: Test code runs sequentially with ENV_MUTEX held.
            unsafe { std::env::set_var(key, value) };
        }

        let result = f();

        for (key, old_value) in old_values {
            match old_value {
                // SAFETY: Test code runs sequentially with ENV_MUTEX held.
                Some(v) => unsafe { std::env::set_var(key, v) },
                // SAFETY: Test code runs sequentially with ENV_MUTEX held.
                None => unsafe { std::env::remove_var(key) },
            }
        }

        result
    }

    #[test]
    fn unset_environment_yields_no_overrides() {
        with_env(&[], || {
            let overrides = env_overrides();

            assert!(overrides.import_prefix.is_none());
            assert!(overrides.base.is_none());
        });
    }

    #[test]
    fn reads_prefix_and_base() {
        with_env(
            &[
                (IMPORT_PREFIX_VAR, "github.com/org/proj"),
                (BASE_VAR, "origin/main"),
            ],
            || {
                let overrides = env_overrides();

                assert_eq!(
                    overrides.import_prefix.as_deref(),
                    Some("github.com/org/proj")
                );
                assert_eq!(overrides.base.as_deref(), Some("origin/main"));
            },
        );
    }

    #[test]
    fn blank_values_are_ignored() {
        with_env(&[(IMPORT_PREFIX_VAR, "  "), (BASE_VAR, "")], || {
            let overrides = env_overrides();

            assert!(overrides.import_prefix.is_none());
            assert!(overrides.base.is_none());
        });
    }

    #[test]
    fn env_never_sets_exclusions_or_policy() {
        with_env(&[(BASE_VAR, "develop")], || {
            let overrides = env_overrides();

            assert!(overrides.extra_excluded_dirs.is_empty());
            assert!(overrides.extra_excluded_packages.is_empty());
            assert!(overrides.on_parse_error.is_none());
        });
    }
}
