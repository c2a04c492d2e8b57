//! Request-to-site domain resolution.
//!
//! Decides which published site a request targets: a platform subdomain
//! route, a customer-owned custom domain, or nothing. Resolution never
//! fails — an unresolvable request yields [`DomainRoute::None`] and the
//! caller answers with its not-found page.

/// Outcome of resolving a request's hostname and optional path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainRoute {
    /// Platform traffic addressed to a site by subdomain.
    Subdomain(String),
    /// A customer-owned hostname; look it up among verified domains.
    CustomDomain(String),
    /// Platform traffic with no subdomain context, or nothing to resolve.
    None,
}

/// Resolve a request against the configured platform hostname allow-list.
///
/// A path-supplied subdomain always wins over hostname inspection: the
/// platform's edge rewrites subdomain hosts into a path segment, so an
/// explicit route is authoritative. Otherwise a hostname matching a
/// platform host (exactly or as one of its subdomains) is platform traffic
/// with no subdomain context, and anything else is a candidate custom
/// domain. Development hosts never resolve as custom domains.
pub fn resolve_route(
    hostname: &str,
    path_subdomain: Option<&str>,
    platform_hosts: &[String],
) -> DomainRoute {
    if let Some(subdomain) = path_subdomain.map(str::trim).filter(|s| !s.is_empty()) {
        return DomainRoute::Subdomain(subdomain.to_ascii_lowercase());
    }

    let host = strip_port(hostname.trim()).to_ascii_lowercase();
    if host.is_empty() {
        return DomainRoute::None;
    }

    if is_development_host(&host) {
        return DomainRoute::None;
    }

    for platform in platform_hosts {
        let platform = platform.trim().to_ascii_lowercase();
        if platform.is_empty() {
            continue;
        }
        if host == platform || host.ends_with(&format!(".{platform}")) {
            return DomainRoute::None;
        }
    }

    DomainRoute::CustomDomain(host)
}

/// Local and loopback hosts are always platform traffic, so development
/// requests never trigger false-positive custom-domain lookups.
fn is_development_host(host: &str) -> bool {
    matches!(host, "localhost" | "127.0.0.1" | "0.0.0.0" | "::1" | "[::1]")
        || host.ends_with(".localhost")
}

/// Drop a trailing `:port`, tolerating bracketed IPv6 literals.
fn strip_port(hostname: &str) -> &str {
    if let Some(end) = hostname.find(']') {
        return &hostname[..=end];
    }
    match hostname.split_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => host,
        _ => hostname,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Vec<String> {
        vec!["siteweaver.app".into(), "siteweaver.dev".into()]
    }

    #[test]
    fn path_subdomain_always_wins() {
        // Even with a non-matching custom-domain hostname present.
        let route = resolve_route("bakery.example.com", Some("acme"), &platform());
        assert_eq!(route, DomainRoute::Subdomain("acme".into()));
    }

    #[test]
    fn blank_path_subdomain_is_ignored() {
        let route = resolve_route("bakery.example.com", Some("  "), &platform());
        assert_eq!(route, DomainRoute::CustomDomain("bakery.example.com".into()));
    }

    #[test]
    fn platform_hosts_resolve_to_none() {
        assert_eq!(
            resolve_route("siteweaver.app", None, &platform()),
            DomainRoute::None
        );
        // Subdomains of a platform host are platform traffic too.
        assert_eq!(
            resolve_route("acme.siteweaver.app", None, &platform()),
            DomainRoute::None
        );
        assert_eq!(
            resolve_route("WWW.SITEWEAVER.DEV", None, &platform()),
            DomainRoute::None
        );
    }

    #[test]
    fn suffix_match_requires_a_dot_boundary() {
        let route = resolve_route("evilsiteweaver.app", None, &platform());
        assert_eq!(
            route,
            DomainRoute::CustomDomain("evilsiteweaver.app".into())
        );
    }

    #[test]
    fn unknown_hostnames_are_custom_domain_candidates() {
        let route = resolve_route("www.corner-bakery.com", None, &platform());
        assert_eq!(
            route,
            DomainRoute::CustomDomain("www.corner-bakery.com".into())
        );
    }

    #[test]
    fn development_hosts_never_become_custom_domains() {
        for host in ["localhost", "localhost:3000", "127.0.0.1:8080", "acme.localhost"] {
            assert_eq!(resolve_route(host, None, &platform()), DomainRoute::None);
        }
    }

    #[test]
    fn ports_are_stripped_before_comparison() {
        assert_eq!(
            resolve_route("siteweaver.app:443", None, &platform()),
            DomainRoute::None
        );
        assert_eq!(
            resolve_route("shop.example.com:8443", None, &platform()),
            DomainRoute::CustomDomain("shop.example.com".into())
        );
    }

    #[test]
    fn empty_hostname_resolves_to_none() {
        assert_eq!(resolve_route("", None, &platform()), DomainRoute::None);
        assert_eq!(resolve_route("   ", None, &platform()), DomainRoute::None);
    }
}
