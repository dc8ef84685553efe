use openssl::pkcs12::Pkcs12;
use std::path::Path;
use tracing::debug;

use super::accessor::{required_str, AssetStore};
use super::models::{AssetType, KEY_CERT_PATH, KEY_PASSWORD};
use crate::errors::Result;

/// Passphrase applied to re-exported containers.
pub const EXPORT_PASSPHRASE: &str = "";

impl AssetStore {
    /// Read the PKCS#12 container named by the record's `CertPath`, open it
    /// with the record's `Password`, and return it re-exported as DER.
    ///
    /// A relative `CertPath` resolves against the current directory.
    pub fn get_certificate(&self, name: &str) -> Result<Vec<u8>> {
        let record = self.find(AssetType::Certificate, name)?;
        let cert_path = required_str(&record, AssetType::Certificate, name, KEY_CERT_PATH)?;
        let password = required_str(&record, AssetType::Certificate, name, KEY_PASSWORD)?;

        let der = std::fs::read(Path::new(cert_path))?;
        debug!(name = %name, cert_path = %cert_path, bytes = der.len(), "Read certificate container");
        reexport_pkcs12(&der, password)
    }
}

/// Decrypt a DER PKCS#12 container and serialize its contents into a new one.
pub fn reexport_pkcs12(der: &[u8], password: &str) -> Result<Vec<u8>> {
    let parsed = Pkcs12::from_der(der)?.parse2(password)?;

    let mut builder = Pkcs12::builder();
    if let Some(pkey) = &parsed.pkey {
        builder.pkey(pkey);
    }
    if let Some(cert) = &parsed.cert {
        builder.cert(cert);
        // Carry the container's friendly name over.
        if let Some(name) = cert.alias().and_then(|alias| std::str::from_utf8(alias).ok()) {
            builder.name(name);
        }
    }
    if let Some(ca) = parsed.ca {
        builder.ca(ca);
    }

    Ok(builder.build2(EXPORT_PASSPHRASE)?.to_der()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AssetError;
    use openssl::asn1::Asn1Time;
    use openssl::hash::MessageDigest;
    use openssl::pkey::{PKey, Private};
    use openssl::rsa::Rsa;
    use openssl::x509::{X509, X509NameBuilder};

    fn self_signed() -> (PKey<Private>, X509) {
        let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();
        let mut name = X509NameBuilder::new().unwrap();
        name.append_entry_by_text("CN", "automation-test").unwrap();
        let name = name.build();

        let mut builder = X509::builder().unwrap();
        builder.set_version(2).unwrap();
        builder.set_subject_name(&name).unwrap();
        builder.set_issuer_name(&name).unwrap();
        builder.set_pubkey(&pkey).unwrap();
        builder.set_not_before(&Asn1Time::days_from_now(0).unwrap()).unwrap();
        builder.set_not_after(&Asn1Time::days_from_now(1).unwrap()).unwrap();
        builder.sign(&pkey, MessageDigest::sha256()).unwrap();
        (pkey, builder.build())
    }

    fn container(password: &str) -> (Vec<u8>, X509) {
        let (pkey, cert) = self_signed();
        let der = Pkcs12::builder()
            .name("automation-test")
            .pkey(&pkey)
            .cert(&cert)
            .build2(password)
            .unwrap()
            .to_der()
            .unwrap();
        (der, cert)
    }

    #[test]
    fn test_reexport_keeps_certificate_and_key() {
        let (der, cert) = container("s3cret-pass");
        let exported = reexport_pkcs12(&der, "s3cret-pass").unwrap();

        let reparsed = Pkcs12::from_der(&exported).unwrap().parse2(EXPORT_PASSPHRASE).unwrap();
        assert_eq!(reparsed.cert.unwrap().to_der().unwrap(), cert.to_der().unwrap());
        assert!(reparsed.pkey.is_some());
    }

    #[test]
    fn test_reexport_keeps_friendly_name() {
        let (der, _) = container("s3cret-pass");
        let exported = reexport_pkcs12(&der, "s3cret-pass").unwrap();

        let reparsed = Pkcs12::from_der(&exported).unwrap().parse2(EXPORT_PASSPHRASE).unwrap();
        let cert = reparsed.cert.unwrap();
        assert_eq!(cert.alias(), Some(&b"automation-test"[..]));
    }

    #[test]
    fn test_wrong_password_is_certificate_error() {
        let (der, _) = container("right-pass");
        let err = reexport_pkcs12(&der, "wrong-pass").unwrap_err();
        assert!(matches!(err, AssetError::Certificate(_)));
    }

    #[test]
    fn test_garbage_input_is_certificate_error() {
        let err = reexport_pkcs12(b"definitely not der", "pass").unwrap_err();
        assert!(matches!(err, AssetError::Certificate(_)));
    }
}
