use super::*;
use serial_test::serial;
use std::io::Write;

const ENV_KEYS: [&str; 4] = ["JIRA_URL", "JIRA_USERNAME", "JIRA_API_TOKEN", "JIRA_PAT"];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

#[test]
fn test_http_config_default() {
    let config = HttpConfig::default();
    assert_eq!(config.user_agent, "jplug-cli");
    assert_eq!(config.timeout, Some(Duration::from_secs(30)));
}

#[test]
fn test_auth_provider_builder() {
    let auth = AuthProvider::new().with_basic("admin", "secret");
    assert_eq!(
        auth.credentials(),
        Some(&Credentials::Basic {
            username: "admin".to_string(),
            token: "secret".to_string(),
        })
    );

    // 後から設定したものが優先
    let auth = auth.with_bearer("pat");
    assert_eq!(auth.credentials(), Some(&Credentials::Bearer("pat".to_string())));
    assert!(AuthProvider::new().is_anonymous());
}

#[test]
#[serial]
fn test_resolve_from_file() {
    clear_env();
    let file = ConfigFile {
        url: Some("https://jira.example.com".to_string()),
        username: Some("admin".to_string()),
        token: Some("file-token".to_string()),
        timeout_secs: Some(5),
        ..Default::default()
    };

    let config = JiraConfig::resolve(file, &ConfigOverrides::default()).unwrap();
    assert_eq!(config.base_url, "https://jira.example.com");
    assert_eq!(config.http.timeout, Some(Duration::from_secs(5)));
    assert!(matches!(
        config.auth.credentials(),
        Some(Credentials::Basic { token, .. }) if token == "file-token"
    ));
}

#[test]
#[serial]
fn test_resolve_precedence() {
    clear_env();
    std::env::set_var("JIRA_URL", "https://env.example.com");
    std::env::set_var("JIRA_USERNAME", "env-user");

    let file = ConfigFile {
        url: Some("https://file.example.com".to_string()),
        username: Some("file-user".to_string()),
        token: Some("file-token".to_string()),
        ..Default::default()
    };

    // 環境変数 > 設定ファイル
    let config = JiraConfig::resolve(file.clone(), &ConfigOverrides::default()).unwrap();
    assert_eq!(config.base_url, "https://env.example.com");
    assert!(matches!(
        config.auth.credentials(),
        Some(Credentials::Basic { username, .. }) if username == "env-user"
    ));

    // 引数 > 環境変数
    let overrides = ConfigOverrides {
        url: Some("https://flag.example.com".to_string()),
        ..Default::default()
    };
    let config = JiraConfig::resolve(file, &overrides).unwrap();
    assert_eq!(config.base_url, "https://flag.example.com");

    clear_env();
}

#[test]
#[serial]
fn test_resolve_bearer_from_env() {
    clear_env();
    std::env::set_var("JIRA_PAT", "personal-token");

    let overrides = ConfigOverrides {
        url: Some("https://jira.example.com".to_string()),
        ..Default::default()
    };
    let config = JiraConfig::resolve(ConfigFile::default(), &overrides).unwrap();
    assert_eq!(
        config.auth.credentials(),
        Some(&Credentials::Bearer("personal-token".to_string()))
    );

    clear_env();
}

#[test]
#[serial]
fn test_resolve_missing_url() {
    clear_env();
    let err = JiraConfig::resolve(ConfigFile::default(), &ConfigOverrides::default()).unwrap_err();
    assert!(matches!(err, JiraError::Config(_)));
}

#[test]
#[serial]
fn test_resolve_token_without_username() {
    clear_env();
    let overrides = ConfigOverrides {
        url: Some("https://jira.example.com".to_string()),
        token: Some("token".to_string()),
        ..Default::default()
    };
    let err = JiraConfig::resolve(ConfigFile::default(), &overrides).unwrap_err();
    assert!(err.to_string().contains("requires a username"));
}

#[test]
#[serial]
fn test_resolve_anonymous() {
    clear_env();
    let config = JiraConfig::resolve(
        ConfigFile {
            url: Some("https://jira.example.com".to_string()),
            ..Default::default()
        },
        &ConfigOverrides::default(),
    )
    .unwrap();
    assert!(config.auth.is_anonymous());
}

#[test]
#[serial]
fn test_blank_env_var_is_ignored() {
    clear_env();
    std::env::set_var("JIRA_URL", "   ");
    let err = JiraConfig::resolve(ConfigFile::default(), &ConfigOverrides::default()).unwrap_err();
    assert!(matches!(err, JiraError::Config(_)));
    clear_env();
}

#[test]
fn test_config_file_missing_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let file = ConfigFile::load_from(&dir.path().join("config.toml")).unwrap();
    assert!(file.url.is_none());
    assert!(file.timeout_secs.is_none());
}

#[test]
fn test_config_file_parse() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        tmp,
        r#"
url = "https://jira.example.com/jira"
username = "admin"
token = "abc"
timeout_secs = 10
"#
    )
    .unwrap();

    let file = ConfigFile::load_from(tmp.path()).unwrap();
    assert_eq!(file.url.as_deref(), Some("https://jira.example.com/jira"));
    assert_eq!(file.username.as_deref(), Some("admin"));
    assert_eq!(file.token.as_deref(), Some("abc"));
    assert_eq!(file.timeout_secs, Some(10));
}

#[test]
fn test_config_file_unknown_key_is_error() {
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    writeln!(tmp, "uri = \"https://typo.example.com\"").unwrap();

    let err = ConfigFile::load_from(tmp.path()).unwrap_err();
    assert!(matches!(err, JiraError::Config(_)));
}

#[test]
#[serial]
fn test_load_with_explicit_path() {
    clear_env();
    let mut tmp = tempfile::NamedTempFile::new().unwrap();
    writeln!(tmp, "url = \"https://jira.example.com\"\npat = \"from-file\"").unwrap();

    let overrides = ConfigOverrides {
        config_path: Some(tmp.path().to_path_buf()),
        ..Default::default()
    };
    let config = JiraConfig::load(&overrides).unwrap();
    assert_eq!(config.base_url, "https://jira.example.com");
    assert_eq!(
        config.auth.credentials(),
        Some(&Credentials::Bearer("from-file".to_string()))
    );
}
