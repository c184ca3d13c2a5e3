/// Configuration for the public page, built once when the view tree is set up
/// and provided through context. The `userId` query parameter selects whose
/// event is shown; `demo` keeps the countdown alive on the demo deployment by
/// pushing a past event date into the future.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicConfig {
    pub user_id: i64,
    pub demo_mode: bool,
}

impl Default for PublicConfig {
    fn default() -> Self {
        PublicConfig {
            user_id: 6,
            demo_mode: false,
        }
    }
}

impl PublicConfig {
    pub fn resolve(user_id: Option<&str>, demo: Option<&str>) -> Self {
        let fallback = PublicConfig::default();
        PublicConfig {
            user_id: user_id
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(fallback.user_id),
            demo_mode: demo.is_some_and(|raw| raw != "0" && raw != "false"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_user_id_from_query() {
        let config = PublicConfig::resolve(Some("42"), None);
        assert_eq!(config.user_id, 42);
        assert!(!config.demo_mode);
    }

    #[test]
    fn falls_back_to_default_on_missing_or_garbage_id() {
        assert_eq!(
            PublicConfig::resolve(None, None).user_id,
            PublicConfig::default().user_id
        );
        assert_eq!(
            PublicConfig::resolve(Some("not-a-number"), None).user_id,
            PublicConfig::default().user_id
        );
    }

    #[test]
    fn demo_flag_is_opt_in() {
        assert!(PublicConfig::resolve(None, Some("1")).demo_mode);
        assert!(!PublicConfig::resolve(None, Some("0")).demo_mode);
        assert!(!PublicConfig::resolve(None, None).demo_mode);
    }
}
