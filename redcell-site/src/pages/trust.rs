use super::layout::{PageContext, PageMeta, render_page};

const SECURITY_EMAIL: &str = "security@redcelladvisory.com";

const SUB_PROCESSORS: [(&str, &str, &str); 3] = [
    ("AWS", "Cloud infrastructure", "Frankfurt, Germany"),
    ("Vercel", "Application hosting", "Global CDN"),
    ("SendGrid", "Email delivery", "United States"),
];

pub fn trust_center_page(ctx: &PageContext) -> String {
    let meta = PageMeta::new(
        "Trust Center",
        "Our Trust Center outlines how we protect client data and operate securely. Certifications are underway; controls are already enforced.",
    );

    let rows: String = SUB_PROCESSORS
        .iter()
        .map(|(name, purpose, location)| {
            format!("<tr><td>{}</td><td>{}</td><td>{}</td></tr>", name, purpose, location)
        })
        .collect();

    let body = format!(
        r#"<article class="trust-center">
<h1>Trust Center</h1>
<p>Our Trust Center outlines how we protect client data and operate securely. Certifications are underway; controls are already enforced.</p>
<h2>Certifications</h2>
<div class="cert-grid">
<div><h3>SOC 2 Type I/II</h3><span class="badge">In Progress</span><p>Audit window: Q4 2025</p><p>Security, availability, and confidentiality controls audit</p></div>
<div><h3>ISO 27001</h3><span class="badge">Roadmap</span><p>Information security management system certification</p></div>
</div>
<h2>Security</h2>
<ul>
<li><strong>Encryption in transit:</strong> All data transmission uses TLS 1.3</li>
<li><strong>Encryption at rest:</strong> AES-256 encryption for stored data</li>
<li><strong>Key management:</strong> Hardware security modules (HSMs) and key rotation</li>
<li><strong>Access controls:</strong> Multi-factor authentication, role-based permissions, and principle of least privilege</li>
</ul>
<h2>Privacy &amp; GDPR</h2>
<ul>
<li><strong>Data Processing Agreement (DPA):</strong> Available upon request for enterprise clients</li>
<li><strong>Sub-processors:</strong> Vetted third-party vendors with appropriate safeguards</li>
</ul>
<h3>Sub-processors</h3>
<table><thead><tr><th>Service Provider</th><th>Purpose</th><th>Location</th></tr></thead><tbody>{rows}</tbody></table>
<h2>Data Retention &amp; Deletion</h2>
<ul>
<li><strong>Standard retention windows:</strong> Case data retained for 7 years post-closure for regulatory compliance</li>
<li><strong>Client-controlled deletion:</strong> Data deletion available upon request, subject to legal obligations</li>
<li><strong>Automated purging:</strong> Non-essential data automatically purged according to retention schedules</li>
</ul>
<h2>Incident Response &amp; Business Continuity</h2>
<ul>
<li><strong>Incident response:</strong> 24/7 monitoring with escalation procedures and client notification within 72 hours</li>
<li><strong>Uptime target:</strong> 99.9% availability with redundant systems and failover capabilities</li>
<li><strong>Contact for incidents:</strong> <a href="mailto:{email}">{email}</a></li>
</ul>
<h2>Vulnerability Disclosure Program</h2>
<p>We maintain a responsible disclosure program for security researchers. For technical details and reporting guidelines, see our <a href="/.well-known/security.txt">security.txt</a> file.</p>
<h2>Compliance Letters</h2>
<div class="letter"><h3>SOC 2 Auditor Letter</h3><p>Independent auditor attestation letter confirming our SOC 2 Type II compliance status.</p><p>Available under Non-Disclosure Agreement (NDA) for qualified prospects and clients.</p>
<a class="btn" href="mailto:{email}?subject=SOC%202%20Auditor%20Letter%20Request" data-cta="procurement_pack_download">Request Access</a></div>
<p class="note">This Trust Center is updated regularly to reflect our current security posture and compliance status. For specific questions or additional documentation, contact <a href="mailto:{email}">{email}</a>.</p>
</article>"#,
        rows = rows,
        email = SECURITY_EMAIL,
    );
    render_page(ctx, &meta, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_sub_processors() {
        let html = trust_center_page(&PageContext::new("/trust-center", "", false));
        assert_eq!(html.matches("<tr><td>").count(), SUB_PROCESSORS.len());
        assert!(html.contains("SOC 2 Auditor Letter"));
    }
}
