use openssl::{
    asn1::{Asn1Time, Asn1Type},
    bn::{BigNum, MsbOption},
    error::ErrorStack,
    hash::{MessageDigest, hash},
    nid::Nid,
    pkey::{PKey, Private},
    rsa::Rsa,
    x509::{X509, X509Name},
};
use sdp_types::Fingerprint;
use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CertificateError {
    #[error("failed to read certificate: {0}")]
    Io(#[from] io::Error),
    #[error("malformed certificate: {0}")]
    Malformed(#[from] ErrorStack),
    #[error("certificate is empty")]
    Empty,
}

/// Anything providing the DER encoding of the local DTLS certificate
pub trait CertificateSource {
    fn certificate_der(&self) -> Result<Vec<u8>, CertificateError>;
}

impl CertificateSource for X509 {
    fn certificate_der(&self) -> Result<Vec<u8>, CertificateError> {
        Ok(self.to_der()?)
    }
}

/// PEM encoded certificate on disk, the first certificate in the file is used
///
/// The file is read every time the certificate is requested.
#[derive(Debug, Clone)]
pub struct PemFile(pub PathBuf);

impl PemFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }
}

impl CertificateSource for PemFile {
    fn certificate_der(&self) -> Result<Vec<u8>, CertificateError> {
        let pem = std::fs::read(&self.0)?;

        if pem.is_empty() {
            return Err(CertificateError::Empty);
        }

        X509::from_pem(&pem)?.certificate_der()
    }
}

/// Self signed certificate with its private key
#[derive(Clone)]
pub struct DtlsCertificate {
    cert: X509,
    pkey: PKey<Private>,
}

impl DtlsCertificate {
    /// Generate a new RSA key and a certificate valid for 7 days
    pub fn generate() -> Result<Self, ErrorStack> {
        openssl::init();

        let rsa = Rsa::generate(2048)?;
        let pkey = PKey::from_rsa(rsa)?;

        let mut cert_builder = X509::builder()?;
        cert_builder.set_version(2)?;

        let serial_number = {
            let mut serial = BigNum::new()?;
            serial.rand(159, MsbOption::MAYBE_ZERO, false)?;
            serial.to_asn1_integer()?
        };
        cert_builder.set_serial_number(&serial_number)?;

        cert_builder.set_pubkey(&pkey)?;
        cert_builder.set_not_before(Asn1Time::days_from_now(0)?.as_ref())?;
        cert_builder.set_not_after(Asn1Time::days_from_now(7)?.as_ref())?;

        let mut x509_name = X509Name::builder()?;
        x509_name.append_entry_by_nid_with_type(Nid::COMMONNAME, "rtcore", Asn1Type::UTF8STRING)?;
        let x509_name = x509_name.build();

        cert_builder.set_subject_name(&x509_name)?;
        cert_builder.set_issuer_name(&x509_name)?;

        cert_builder.sign(&pkey, MessageDigest::sha256())?;

        Ok(Self {
            cert: cert_builder.build(),
            pkey,
        })
    }

    pub fn certificate(&self) -> &X509 {
        &self.cert
    }

    pub fn private_key(&self) -> &PKey<Private> {
        &self.pkey
    }

    /// PEM encoding of the certificate, e.g. to persist it for a [`PemFile`]
    pub fn to_pem(&self) -> Result<Vec<u8>, ErrorStack> {
        self.cert.to_pem()
    }
}

impl CertificateSource for DtlsCertificate {
    fn certificate_der(&self) -> Result<Vec<u8>, CertificateError> {
        self.cert.certificate_der()
    }
}

/// SHA-256 fingerprint over the DER encoding of the certificate
pub fn sha256_fingerprint<C>(source: &C) -> Result<Fingerprint, CertificateError>
where
    C: CertificateSource + ?Sized,
{
    let der = source.certificate_der()?;

    if der.is_empty() {
        return Err(CertificateError::Empty);
    }

    let digest = hash(MessageDigest::sha256(), &der)?;

    Ok(Fingerprint::sha256(digest.to_vec()))
}

#[cfg(test)]
mod test {
    use super::*;

    struct Raw(Vec<u8>);

    impl CertificateSource for Raw {
        fn certificate_der(&self) -> Result<Vec<u8>, CertificateError> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn fingerprint_of_raw_bytes() {
        let fingerprint = sha256_fingerprint(&Raw(b"abc".to_vec())).unwrap();

        assert_eq!(
            fingerprint.hex(),
            "BA:78:16:BF:8F:01:CF:EA:41:41:40:DE:5D:AE:22:23:B0:03:61:A3:96:17:7A:9C:B4:10:FF:61:F2:00:15:AD"
        );
        assert_eq!(fingerprint.hex().len(), 32 * 2 + 31);
    }

    #[test]
    fn empty_certificate() {
        assert!(matches!(
            sha256_fingerprint(&Raw(vec![])),
            Err(CertificateError::Empty)
        ));
    }

    #[test]
    fn generated_certificate() {
        let certificate = DtlsCertificate::generate().unwrap();

        let a = sha256_fingerprint(&certificate).unwrap();
        let b = sha256_fingerprint(certificate.certificate()).unwrap();

        assert_eq!(a, b);
        assert!(certificate.to_pem().unwrap().starts_with(b"-----BEGIN CERTIFICATE-----"));
    }

    #[test]
    fn missing_pem_file() {
        let source = PemFile::new("/nonexistent/cert.pem");

        assert!(matches!(
            sha256_fingerprint(&source),
            Err(CertificateError::Io(_))
        ));
    }
}
