use crate::ssl::enums::certificate_error::CertificateError;
use crate::ssl::structs::leaf_info::LeafInfo;
use rustls::pki_types::CertificateDer;
use x509_parser::prelude::{FromDer, GeneralName, X509Certificate};

impl LeafInfo {
    pub fn from_der(der: &CertificateDer<'_>) -> Result<LeafInfo, CertificateError> {
        let (_, cert) = X509Certificate::from_der(der.as_ref())
            .map_err(|e| CertificateError::LeafParse(e.to_string()))?;
        let common_name = cert
            .subject()
            .iter_common_name()
            .next()
            .and_then(|cn| cn.as_str().ok())
            .map(str::to_string);
        let dns_names = match cert.subject_alternative_name() {
            Ok(Some(san)) => san
                .value
                .general_names
                .iter()
                .filter_map(|name| match name {
                    GeneralName::DNSName(dns) => Some(dns.to_string()),
                    _ => None,
                })
                .collect(),
            Ok(None) => Vec::new(),
            Err(e) => return Err(CertificateError::LeafParse(e.to_string())),
        };
        let validity = cert.validity();
        Ok(LeafInfo {
            subject: cert.subject().to_string(),
            common_name,
            issuer: cert.issuer().to_string(),
            serial: cert.raw_serial_as_string(),
            not_before: Self::to_utc(validity.not_before.timestamp())?,
            not_after: Self::to_utc(validity.not_after.timestamp())?,
            dns_names,
        })
    }

    fn to_utc(timestamp: i64) -> Result<chrono::DateTime<chrono::Utc>, CertificateError> {
        chrono::DateTime::from_timestamp(timestamp, 0).ok_or_else(|| {
            CertificateError::LeafParse(format!("validity timestamp out of range: {}", timestamp))
        })
    }
}

impl std::fmt::Display for LeafInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "subject=\"{}\" issuer=\"{}\" serial={} not_after={}",
            self.subject,
            self.issuer,
            self.serial,
            self.not_after.to_rfc3339()
        )
    }
}
