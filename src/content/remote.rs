// SPDX-License-Identifier: MPL-2.0
//! Downloads for the few assets that only exist online: the contact QR code
//! and the vCard file.

use crate::error::{Error, Result};
use std::fs;
use std::path::PathBuf;

/// Responses larger than this are refused.
pub const MAX_DOWNLOAD_BYTES: usize = 4 * 1024 * 1024;

const USER_AGENT: &str = concat!("FolioReel/", env!("CARGO_PKG_VERSION"));

/// Fetches an image over HTTP(S) and returns its encoded bytes.
///
/// # Errors
///
/// Returns [`Error::Network`] when the request fails, the server answers with
/// a non-success status, or the body is empty or exceeds [`MAX_DOWNLOAD_BYTES`].
pub async fn fetch_image(url: String) -> Result<Vec<u8>> {
    let bytes = fetch_bytes(&url).await?;
    tracing::debug!(%url, bytes = bytes.len(), "fetched remote image");
    Ok(bytes)
}

/// Downloads `url` into `directory/file_name`, creating the directory.
///
/// The body goes to a `.part` file first and is renamed into place once
/// complete; on any failure the partial file is removed.
///
/// # Errors
///
/// Network failures as for [`fetch_image`], and [`Error::Io`] when the file
/// cannot be written.
pub async fn download_file(url: String, directory: PathBuf, file_name: String) -> Result<PathBuf> {
    let bytes = fetch_bytes(&url).await?;
    fs::create_dir_all(&directory)?;

    let path = directory.join(&file_name);
    let partial = directory.join(format!(".{file_name}.part"));
    if let Err(err) = fs::write(&partial, &bytes).and_then(|()| fs::rename(&partial, &path)) {
        let _ = fs::remove_file(&partial);
        tracing::warn!(path = %path.display(), error = %err, "could not save download");
        return Err(err.into());
    }

    tracing::info!(%url, path = %path.display(), "downloaded file");
    Ok(path)
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>> {
    let parsed = url::Url::parse(url).map_err(|e| Error::Network(e.to_string()))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(Error::Network(format!("unsupported scheme: {}", parsed.scheme())));
    }

    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(5))
        .user_agent(USER_AGENT)
        .build()?;

    let mut response = client.get(parsed).send().await?;
    if !response.status().is_success() {
        return Err(Error::Network(format!("HTTP status: {}", response.status())));
    }

    // Refuse announced oversized bodies before reading any of them.
    if let Some(announced) = response.content_length() {
        let announced = usize::try_from(announced).unwrap_or(usize::MAX);
        check_size(announced.max(1))?;
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        check_size(body.len() + chunk.len())?;
        body.extend_from_slice(&chunk);
    }
    check_size(body.len())?;
    Ok(body)
}

fn check_size(len: usize) -> Result<()> {
    if len == 0 {
        return Err(Error::Network("empty response body".into()));
    }
    if len > MAX_DOWNLOAD_BYTES {
        return Err(Error::Network(format!(
            "response too large ({len} bytes, limit {MAX_DOWNLOAD_BYTES})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    const MIB: usize = 1024 * 1024;

    /// One-shot HTTP server: answers the first request with `head`, then
    /// writes `chunks` blocks of `chunk_len` bytes (or holds the connection
    /// open when `chunks` is zero). Resolves to the number of body bytes the
    /// client accepted before hanging up.
    async fn serve_once(head: &'static str, chunks: usize, chunk_len: usize) -> (String, JoinHandle<usize>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let url = format!("http://{}/card", listener.local_addr().expect("addr"));

        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept");
            let mut request = [0u8; 2048];
            let _ = socket.read(&mut request).await;
            if socket.write_all(head.as_bytes()).await.is_err() {
                return 0;
            }
            if chunks == 0 {
                tokio::time::sleep(Duration::from_secs(30)).await;
                return 0;
            }
            let block = vec![b'x'; chunk_len];
            let mut sent = 0;
            for _ in 0..chunks {
                if socket.write_all(&block).await.is_err() {
                    break;
                }
                sent += chunk_len;
            }
            sent
        });

        (url, server)
    }

    #[test]
    fn size_check_rejects_empty_and_oversized_bodies() {
        assert!(check_size(0).is_err());
        assert!(check_size(1024).is_ok());
        assert!(check_size(MAX_DOWNLOAD_BYTES + 1).is_err());
    }

    #[tokio::test]
    async fn non_http_schemes_are_refused_before_any_request() {
        let err = fetch_image("file:///etc/passwd".into()).await.unwrap_err();
        assert_eq!(err.i18n_key(), "error-network");

        let err = fetch_image("not a url".into()).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn small_body_is_returned_whole() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nConnection: close\r\n\r\n",
            4,
            1024,
        )
        .await;

        let bytes = fetch_image(url).await.expect("download");
        assert_eq!(bytes.len(), 4 * 1024);
        assert_eq!(server.await.expect("server"), 4 * 1024);
    }

    #[tokio::test]
    async fn unannounced_oversized_body_stops_streaming_early() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nConnection: close\r\n\r\n",
            64,
            MIB,
        )
        .await;

        let err = fetch_image(url).await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));

        // Hanging up must stop the server well before the whole 64 MiB.
        let sent = server.await.expect("server");
        assert!(sent < 32 * MIB, "client kept reading: {sent} bytes");
    }

    #[tokio::test]
    async fn announced_oversized_body_is_refused_without_reading() {
        let (url, _server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 67108864\r\nConnection: close\r\n\r\n",
            0,
            0,
        )
        .await;

        // The server never sends a body; only the header check can end this.
        let result = tokio::time::timeout(Duration::from_secs(5), fetch_image(url))
            .await
            .expect("refused from the Content-Length header");
        assert!(matches!(result, Err(Error::Network(_))));
    }

    #[tokio::test]
    async fn failed_download_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("downloads");
        let result = download_file("ftp://example.org/card.vcf".into(), target.clone(), "card.vcf".into()).await;
        assert!(result.is_err());
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn oversized_download_writes_nothing() {
        let (url, _server) = serve_once(
            "HTTP/1.1 200 OK\r\nConnection: close\r\n\r\n",
            8,
            MIB,
        )
        .await;
        let dir = tempfile::tempdir().expect("temp dir");
        let target = dir.path().join("downloads");

        let result = download_file(url, target.clone(), "card.vcf".into()).await;
        assert!(result.is_err());
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn failed_write_leaves_no_partial_file() {
        let (url, _server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/vcard\r\nConnection: close\r\n\r\n",
            1,
            512,
        )
        .await;
        let dir = tempfile::tempdir().expect("temp dir");
        // A directory in the way makes the final rename fail.
        fs::create_dir(dir.path().join("card.vcf")).expect("blocking dir");

        let result = download_file(url, dir.path().to_path_buf(), "card.vcf".into()).await;
        assert!(matches!(result, Err(Error::Io(_))));

        let entries: Vec<_> = fs::read_dir(dir.path())
            .expect("read dir")
            .filter_map(|entry| entry.ok().map(|entry| entry.file_name()))
            .collect();
        assert_eq!(entries, vec![std::ffi::OsString::from("card.vcf")]);
        assert!(dir.path().join("card.vcf").is_dir());
    }
}
