pub mod commands;
pub mod get;
pub mod list;
pub mod set;

pub use commands::{Cli, Commands};

use std::io::Write;
use std::path::Path;
use crate::config::{parse_config, resolve_document_path, FileSettings, StoreConfig};
use crate::errors::AssetError;
use crate::store::AssetStore;

/// Build the store for this invocation. Document path precedence:
/// `--asset-file`, then the settings file, then the environment or default.
pub fn build_store(cli: &Cli) -> Result<AssetStore, AssetError> {
    build_store_with_fallback(cli, &resolve_document_path())
}

/// [`build_store`] with the environment/default layer supplied by the caller.
pub fn build_store_with_fallback(cli: &Cli, fallback: &Path) -> Result<AssetStore, AssetError> {
    let settings = match &cli.config {
        Some(path) => parse_config(path)?,
        None => FileSettings::default(),
    };
    let mut config = StoreConfig::from_settings(&settings, fallback);
    if let Some(path) = &cli.asset_file {
        config.asset_file = path.clone();
    }
    tracing::debug!(path = %config.asset_file.display(), atomic = config.atomic_writes, "Using asset document");
    Ok(AssetStore::new(config))
}

/// Run the selected command, writing its output to `out`.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<(), AssetError> {
    let store = build_store(cli)?;
    match &cli.command {
        Commands::GetVariable(args) => get::handle_get_variable(&store, args, out),
        Commands::SetVariable(args) => set::handle_set_variable(&store, args, out),
        Commands::GetCredential(args) => get::handle_get_credential(&store, args, out),
        Commands::GetConnection(args) => get::handle_get_connection(&store, args, out),
        Commands::GetCertificate(args) => get::handle_get_certificate(&store, args, out),
        Commands::List(args) => list::handle_list(&store, args, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::document_path_from;
    use clap::Parser;
    use std::ffi::OsString;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["automation-assets"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn settings_file(dir: &TempDir, body: &str) -> String {
        let path = dir.path().join("settings.yaml");
        std::fs::write(&path, body).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn env_fallback() -> PathBuf {
        document_path_from(Some(OsString::from("/env/assets.json")))
    }

    #[test]
    fn test_fallback_used_without_flag_or_settings() {
        let cli = parse(&["get-variable", "x"]);
        let store = build_store_with_fallback(&cli, &env_fallback()).unwrap();
        assert_eq!(store.path(), Path::new("/env/assets.json"));
    }

    #[test]
    fn test_default_fallback_when_env_unset() {
        let cli = parse(&["get-variable", "x"]);
        let store = build_store_with_fallback(&cli, &document_path_from(None)).unwrap();
        assert_eq!(store.path(), crate::config::default_document_path());
    }

    #[test]
    fn test_settings_file_beats_fallback() {
        let dir = TempDir::new().unwrap();
        let settings = settings_file(&dir, "asset_file: /settings/assets.json\nindent: 2\n");
        let cli = parse(&["--config", &settings, "get-variable", "x"]);
        let store = build_store_with_fallback(&cli, &env_fallback()).unwrap();
        assert_eq!(store.path(), Path::new("/settings/assets.json"));
        assert_eq!(store.config().indent, 2);
    }

    #[test]
    fn test_flag_beats_settings_file() {
        let dir = TempDir::new().unwrap();
        let settings = settings_file(&dir, "asset_file: /settings/assets.json\n");
        let cli = parse(&["--config", &settings, "--asset-file", "/flag/assets.json", "get-variable", "x"]);
        let store = build_store_with_fallback(&cli, &env_fallback()).unwrap();
        assert_eq!(store.path(), Path::new("/flag/assets.json"));
    }

    #[test]
    fn test_settings_without_path_keep_fallback() {
        let dir = TempDir::new().unwrap();
        let settings = settings_file(&dir, "atomic_writes: false\n");
        let cli = parse(&["--config", &settings, "get-variable", "x"]);
        let store = build_store_with_fallback(&cli, &env_fallback()).unwrap();
        assert_eq!(store.path(), Path::new("/env/assets.json"));
        assert!(!store.config().atomic_writes);
    }

    #[test]
    fn test_missing_settings_file_is_config_error() {
        let cli = parse(&["--config", "/nonexistent/settings.yaml", "get-variable", "x"]);
        let err = build_store_with_fallback(&cli, &env_fallback()).unwrap_err();
        assert_eq!(err.classify().exit_code, 2);
    }

    #[test]
    fn test_run_get_certificate_writes_pkcs12() {
        use openssl::asn1::Asn1Time;
        use openssl::hash::MessageDigest;
        use openssl::pkcs12::Pkcs12;
        use openssl::pkey::PKey;
        use openssl::rsa::Rsa;
        use openssl::x509::{X509, X509NameBuilder};

        let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
        let mut name = X509NameBuilder::new().unwrap();
        name.append_entry_by_text("CN", "cli-export").unwrap();
        let name = name.build();
        let mut builder = X509::builder().unwrap();
        builder.set_version(2).unwrap();
        builder.set_subject_name(&name).unwrap();
        builder.set_issuer_name(&name).unwrap();
        builder.set_pubkey(&pkey).unwrap();
        builder.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
        builder.set_not_after(&Asn1Time::days_from_now(1).unwrap()).unwrap();
        builder.sign(&pkey, MessageDigest::sha256()).unwrap();
        let cert = builder.build();

        let dir = TempDir::new().unwrap();
        let pfx_path = dir.path().join("web.pfx");
        let der = Pkcs12::builder()
            .pkey(&pkey)
            .cert(&cert)
            .build2("pfx-pass")
            .unwrap()
            .to_der()
            .unwrap();
        std::fs::write(&pfx_path, der).unwrap();

        let doc_path = dir.path().join("assets.json");
        let doc = serde_json::json!({
            "Certificate": [{"Name": "web", "CertPath": pfx_path.to_str().unwrap(), "Password": "pfx-pass"}]
        });
        std::fs::write(&doc_path, doc.to_string()).unwrap();

        let out_path = dir.path().join("exported.pfx");
        let cli = parse(&[
            "--asset-file",
            doc_path.to_str().unwrap(),
            "get-certificate",
            "web",
            "--out",
            out_path.to_str().unwrap(),
        ]);
        let mut buf = Vec::new();
        run(&cli, &mut buf).unwrap();

        let exported = std::fs::read(&out_path).unwrap();
        let message = String::from_utf8(buf).unwrap();
        assert!(message.starts_with(&format!("Wrote {} bytes to ", exported.len())));

        let parsed = Pkcs12::from_der(&exported).unwrap().parse2("").unwrap();
        assert_eq!(parsed.cert.unwrap().to_der().unwrap(), cert.to_der().unwrap());
    }

    #[test]
    fn test_run_unknown_certificate_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let doc_path = dir.path().join("assets.json");
        std::fs::write(&doc_path, r#"{"Certificate": []}"#).unwrap();
        let out_path = dir.path().join("exported.pfx");
        let cli = parse(&[
            "--asset-file",
            doc_path.to_str().unwrap(),
            "get-certificate",
            "web",
            "--out",
            out_path.to_str().unwrap(),
        ]);
        let err = run(&cli, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.is_not_found());
        assert!(!out_path.exists());
    }
}
