// SPDX-License-Identifier: MPL-2.0
//! Digital contact card shown in the QR modal and on the contact screen.

use url::form_urlencoded;

/// QR rendering service used for the vCard code.
const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default QR code edge length in pixels.
pub const DEFAULT_QR_SIZE: u32 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactCard {
    pub name: String,
    pub headline: String,
    /// Public URL of the `.vcf` file encoded in the QR code.
    pub vcard_url: String,
    /// File name suggested when the vCard is downloaded.
    pub download_name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub linkedin: String,
    pub github: String,
    pub qr_size: u32,
}

impl ContactCard {
    /// URL of a PNG QR code pointing at the vCard.
    #[must_use]
    pub fn qr_code_url(&self) -> String {
        let data: String = form_urlencoded::byte_serialize(self.vcard_url.as_bytes()).collect();
        format!(
            "{QR_SERVICE}?size={size}x{size}&data={data}",
            size = self.qr_size
        )
    }

    #[must_use]
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    #[must_use]
    pub fn tel(&self) -> String {
        format!("tel:{}", self.phone)
    }
}

impl Default for ContactCard {
    fn default() -> Self {
        Self {
            name: "Oliver Wainaina".into(),
            headline: "Full Stack Software Engineer & IoT Developer specializing in web development, mobile apps, and IoT solutions. Tech speaker, design thinking mentor, and youth leadership advocate.".into(),
            vcard_url: "https://oliversolomon.dev/oliver-wainaina.vcf".into(),
            download_name: "Oliver-Wainaina-Contact.vcf".into(),
            email: "oliverwai9na@gmail.com".into(),
            phone: "+254742949664".into(),
            website: "https://oliversolomon.dev".into(),
            linkedin: "https://www.linkedin.com/in/oliver-s-wainaina".into(),
            github: "https://github.com/oliversolomon".into(),
            qr_size: DEFAULT_QR_SIZE,
        }
    }
}
