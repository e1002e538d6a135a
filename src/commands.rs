//! openssl command lines shown to app publishers.
//!
//! These strings are instructions rendered next to the registration and
//! upload forms; nothing here executes a process. `APP_ID` is a literal
//! placeholder the publisher substitutes with their own app id.

/// Command for creating a certificate sign request.
pub fn create_cert_cmd() -> String {
    "openssl req -nodes -newkey rsa:4096 -keyout APP_ID.key \
     -out APP_ID.csr -subj \"/CN=APP_ID\""
        .to_string()
}

/// Command for signing an app id during registration.
///
/// `digest` is the configured certificate digest, e.g. "sha512".
pub fn register_sign_cmd(digest: &str) -> String {
    format!(
        "echo -n \"APP_ID\" | openssl dgst -{} -sign \
         ~/.appstore/certificates/APP_ID.key | openssl base64",
        digest
    )
}

/// Command for signing a release tarball before upload.
pub fn release_sign_cmd(digest: &str) -> String {
    format!(
        "openssl dgst -{} -sign ~/.appstore/certificates/APP_ID.key \
         /path/to/app.tar.gz | openssl base64",
        digest
    )
}
