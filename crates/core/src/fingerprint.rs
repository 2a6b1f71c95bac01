//! Vendor/transport/profile/platform classification.
//!
//! Classifies a single [`NetworkEvent`] by host and path heuristics plus
//! User-Agent sniffing. Pure function, no I/O, first-match-wins rule order.

use harmony_domain::{Fingerprint, NetworkEvent, Platform, Profile, Transport, Vendor};

/// Classify one network event into a [`Fingerprint`].
///
/// Rule order matters: the first matching host/path pattern wins, mirroring
/// the upstream heuristic's `if/elif` chain.
#[must_use]
pub fn fingerprint_event(event: &NetworkEvent) -> Fingerprint {
    let (host, path) = host_and_path(&event.url);

    let (vendor, transport, profile) =
        if host.ends_with("hb-api.omtrdc.net") || host.ends_with("hb.omtrdc.net") {
            (Some(Vendor::Adobe), Some(Transport::Heartbeat), Some(Profile::Legacy))
        } else if host.ends_with("adobedc.net") && path.contains("/ee/v1/") {
            (Some(Vendor::Adobe), Some(Transport::Edge), Some(Profile::Web))
        } else if path.contains("/b/ss/") {
            (Some(Vendor::Adobe), Some(Transport::AaClassic), Some(Profile::Web))
        } else if host.contains("google-analytics.com") || host.contains("googletagmanager.com") {
            (Some(Vendor::Ga4), Some(Transport::Measurement), Some(Profile::Web))
        } else {
            (None, None, None)
        };

    let platform = event.request_header("user-agent").and_then(infer_platform);

    Fingerprint { vendor, transport, profile, platform }
}

/// Lower-cased `(host, path)` from a URL, tolerant of unparseable input.
fn host_and_path(url: &str) -> (String, String) {
    match url::Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default().to_ascii_lowercase();
            (host, parsed.path().to_ascii_lowercase())
        }
        Err(_) => (String::new(), String::new()),
    }
}

/// Infer client platform from a User-Agent string. Order matters: generic
/// desktop tokens ("mozilla", "linux") appear inside mobile UAs too, so
/// specific device families are checked first.
fn infer_platform(user_agent: &str) -> Option<Platform> {
    let ua = user_agent.to_ascii_lowercase();
    if ua.contains("roku") {
        Some(Platform::Roku)
    } else if ua.contains("firetv") || ua.contains("aft") {
        Some(Platform::FireTv)
    } else if ua.contains("tvos") || ua.contains("appletv") || ua.contains("apple tv") {
        Some(Platform::Tvos)
    } else if ua.contains("iphone") || ua.contains("ipad") || ua.contains("ipod") {
        Some(Platform::Ios)
    } else if ua.contains("android") {
        Some(Platform::Android)
    } else if ua.contains("windows")
        || ua.contains("macintosh")
        || ua.contains("linux")
        || ua.contains("mozilla")
    {
        Some(Platform::Web)
    } else {
        None
    }
}

/// Report suite IDs carried by a classic Adobe Analytics (`/b/ss/<rsid>/`)
/// request, plus the `rsid`/`rsid_list` query parameters. Deduplicated and
/// sorted for a stable summary.
///
/// This is not part of [`Fingerprint`] — it is a supplementary side-channel
/// consulted only when a report wants to surface which suites a session hit.
#[must_use]
pub fn extract_report_suite_ids(event: &NetworkEvent) -> Vec<String> {
    let mut rsids = Vec::new();
    let (_, path) = host_and_path(&event.url);

    if let Some(idx) = path.find("/b/ss/") {
        let segment = &path[idx + "/b/ss/".len()..];
        let first_part = segment.split('/').next().unwrap_or_default();
        rsids.extend(
            first_part.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
        );
    }

    if let Some(rsid) = event.query_param("rsid") {
        let trimmed = rsid.trim();
        if !trimmed.is_empty() {
            rsids.push(trimmed.to_string());
        }
    }
    if let Some(rsid_list) = event.query_param("rsid_list") {
        rsids.extend(
            rsid_list.split(',').map(str::trim).filter(|s| !s.is_empty()).map(str::to_string),
        );
    }

    rsids.sort();
    rsids.dedup();
    rsids
}

#[cfg(test)]
mod tests {
    use harmony_domain::EventSource;

    use super::*;

    fn event(url: &str) -> NetworkEvent {
        NetworkEvent {
            url: url.to_string(),
            method: "GET".to_string(),
            status: 200,
            started_date_time: "2024-01-01T00:00:00Z".to_string(),
            request_headers: Default::default(),
            response_headers: Default::default(),
            query_params: Vec::new(),
            post_data: None,
            body_json: None,
            source: EventSource::default(),
        }
    }

    #[test]
    fn classifies_heartbeat_host() {
        let e = event("https://company.hb-api.omtrdc.net/api/v1/sessions");
        let fp = fingerprint_event(&e);
        assert_eq!(fp.vendor, Some(Vendor::Adobe));
        assert_eq!(fp.transport, Some(Transport::Heartbeat));
        assert_eq!(fp.profile, Some(Profile::Legacy));
    }

    #[test]
    fn classifies_edge_host() {
        let e = event("https://company.adobedc.net/ee/v1/interact");
        let fp = fingerprint_event(&e);
        assert_eq!(fp.vendor, Some(Vendor::Adobe));
        assert_eq!(fp.transport, Some(Transport::Edge));
    }

    #[test]
    fn classifies_aa_classic_path() {
        let e = event("https://metrics.example.com/b/ss/mysite/1/JS-2.0/s12345");
        let fp = fingerprint_event(&e);
        assert_eq!(fp.vendor, Some(Vendor::Adobe));
        assert_eq!(fp.transport, Some(Transport::AaClassic));
    }

    #[test]
    fn classifies_ga4_host() {
        let e = event("https://www.google-analytics.com/g/collect");
        let fp = fingerprint_event(&e);
        assert_eq!(fp.vendor, Some(Vendor::Ga4));
        assert_eq!(fp.transport, Some(Transport::Measurement));
    }

    #[test]
    fn unclassified_host_yields_unknown() {
        let e = event("https://example.com/other");
        assert_eq!(fingerprint_event(&e), Fingerprint::unknown());
    }

    #[test]
    fn platform_inference_prefers_specific_device_over_generic_tokens() {
        let mut e = event("https://example.com/b/ss/rsid/1");
        e.request_headers
            .insert("User-Agent".to_string(), "Mozilla/5.0 (iPhone; CPU iPhone OS)".to_string());
        assert_eq!(fingerprint_event(&e).platform, Some(Platform::Ios));
    }

    #[test]
    fn extracts_rsid_from_path() {
        let e = event("https://metrics.example.com/b/ss/mysite,othersite/1/JS-2.0/s1");
        assert_eq!(extract_report_suite_ids(&e), vec!["mysite".to_string(), "othersite".to_string()]);
    }

    #[test]
    fn extracts_rsid_from_query_params() {
        let mut e = event("https://metrics.example.com/b/ss/s1");
        e.query_params.push(("rsid_list".to_string(), "foo, bar".to_string()));
        let rsids = extract_report_suite_ids(&e);
        assert!(rsids.contains(&"foo".to_string()));
        assert!(rsids.contains(&"bar".to_string()));
    }
}
