//! HAR (HTTP Archive) corpus: load captured traffic from a HAR 1.2 file.
//!
//! Every entry becomes an [`Exchange`](crate::exchange::Exchange). Bodies
//! stored as base64 are decoded; entries with response status 0 (request sent,
//! nothing received) carry no body and are later skipped by the exporter.

mod parse;
mod source;

pub use source::HarSource;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{find_header, ExchangeSource};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"{
        "log": {
            "version": "1.2",
            "entries": [
                {
                    "request": {
                        "url": "https://example.com/app/",
                        "headers": [ { "name": "Host", "value": "example.com" } ]
                    },
                    "response": {
                        "status": 200,
                        "headers": [ { "name": "Content-Type", "value": "text/html; charset=utf-8" } ],
                        "content": { "mimeType": "text/html", "text": "<h1>hi</h1>" }
                    }
                },
                {
                    "request": { "url": "https://example.com/app/logo", "headers": [] },
                    "response": {
                        "status": 200,
                        "headers": [ { "name": "Content-Type", "value": "image/png" } ],
                        "content": { "mimeType": "image/png", "text": "iVBORw==", "encoding": "base64" }
                    }
                },
                {
                    "request": { "url": "https://example.com/app/pending", "headers": [] },
                    "response": { "status": 0, "headers": [], "content": {} }
                },
                {
                    "request": { "url": "https://elsewhere.example/x", "headers": [] },
                    "response": { "status": 204, "headers": [] }
                }
            ]
        }
    }"#;

    #[test]
    fn open_reads_bodies_and_headers() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(SAMPLE.as_bytes()).unwrap();
        f.flush().unwrap();

        let source = HarSource::open(f.path()).unwrap();
        let all = source.exchanges();
        assert_eq!(all.len(), 4);

        assert_eq!(all[0].response_body.as_deref(), Some(&b"<h1>hi</h1>"[..]));
        assert_eq!(find_header(&all[0].request_headers, "host"), Some("example.com"));
        assert_eq!(
            find_header(&all[0].response_headers, "content-type"),
            Some("text/html; charset=utf-8")
        );

        assert_eq!(
            all[1].response_body.as_deref(),
            Some(&[0x89, b'P', b'N', b'G'][..])
        );
        assert!(all[2].response_body.is_none());
        assert_eq!(all[3].response_body.as_deref(), Some(&b""[..]));
    }

    #[test]
    fn matching_exchanges_uses_url_prefix() {
        let source = HarSource::from_json(SAMPLE.as_bytes()).unwrap();
        let matched = source
            .matching_exchanges("https://example.com/app/")
            .unwrap();
        assert_eq!(matched.len(), 3);
        assert!(matched
            .iter()
            .all(|e| e.request_url.starts_with("https://example.com/app/")));
    }

    #[test]
    fn find_exchange_exact_url() {
        let source = HarSource::from_json(SAMPLE.as_bytes()).unwrap();
        let base = source.find_exchange("https://example.com/app/").unwrap();
        assert_eq!(find_header(&base.request_headers, "Host"), Some("example.com"));
        assert!(source.find_exchange("https://example.com/app").is_none());
    }

    #[test]
    fn missing_response_means_no_body() {
        let har = r#"{"log":{"entries":[{"request":{"url":"https://example.com/a"}}]}}"#;
        let source = HarSource::from_json(har.as_bytes()).unwrap();
        assert!(source.exchanges()[0].response_body.is_none());
    }

    #[test]
    fn invalid_base64_is_an_error() {
        let har = r#"{"log":{"entries":[{
            "request":{"url":"https://example.com/bad"},
            "response":{"status":200,"content":{"text":"***","encoding":"base64"}}
        }]}}"#;
        let err = HarSource::from_json(har.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("https://example.com/bad"));
    }

    #[test]
    fn open_missing_file_err() {
        let dir = tempfile::tempdir().unwrap();
        assert!(HarSource::open(&dir.path().join("nope.har")).is_err());
    }
}
