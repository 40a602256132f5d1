//! Placeholder content shown by the public site when the API is unreachable.

use crate::{Leader, Resource, Service};

fn service(id: i64, name: &str, description: &str, price: f64, category: &str, photo: &str) -> Service {
    Service {
        id,
        name: name.into(),
        slug: crate::service::slugify(name),
        description: description.into(),
        price,
        photo: Some(photo.into()),
        category: Some(category.into()),
    }
}

pub fn default_services() -> Vec<Service> {
    vec![
        service(
            1,
            "Web Development",
            "Custom websites and web applications built with modern technologies. Responsive design, fast performance, and SEO optimized.",
            2500.0,
            "development",
            "/assets/web-dev.jpg",
        ),
        service(
            2,
            "Mobile App Development",
            "Native and cross-platform mobile applications for iOS and Android. User-friendly interfaces with robust functionality.",
            5000.0,
            "development",
            "/assets/mobile-dev.jpg",
        ),
        service(
            3,
            "DevOps & CI/CD",
            "Automated deployment pipelines, containerization, and infrastructure as code. Reduce deployment time by 80%.",
            1500.0,
            "infrastructure",
            "/assets/devops.jpg",
        ),
        service(
            4,
            "Cloud Migration",
            "Seamless migration to AWS, Azure, or Google Cloud. Zero downtime migration with enhanced security and scalability.",
            3000.0,
            "infrastructure",
            "/assets/cloud.jpg",
        ),
        service(
            5,
            "Cybersecurity",
            "Enterprise-grade security implementation. Protect your digital assets with advanced threat detection and prevention.",
            2000.0,
            "security",
            "/assets/security.jpg",
        ),
        service(
            6,
            "24/7 Support & Monitoring",
            "Proactive monitoring and instant issue resolution. Keep your systems running smoothly around the clock.",
            800.0,
            "support",
            "/assets/support.jpg",
        ),
    ]
}

fn resource(id: i64, title: &str, description: &str, kind: &str) -> Resource {
    Resource {
        id,
        title: title.into(),
        description: Some(description.into()),
        kind: kind.into(),
        url: "#".into(),
    }
}

pub fn default_resources() -> Vec<Resource> {
    vec![
        resource(1, "DevOps Best Practices Guide", "Comprehensive guide to implementing DevOps practices in your organization.", "guide"),
        resource(2, "Cloud Migration Checklist", "Step-by-step checklist for successful cloud migration projects.", "checklist"),
        resource(3, "Cybersecurity Assessment", "Free security assessment to identify vulnerabilities in your systems.", "assessment"),
        resource(4, "Technology Trends 2024", "Latest insights on emerging technologies and their business impact.", "report"),
    ]
}

fn member(id: i64, name: &str, bio: &str) -> Leader {
    Leader { id, name: name.into(), photo: None, bio: Some(bio.into()) }
}

pub fn default_team() -> Vec<Leader> {
    vec![
        member(1, "John Doe", "CEO & Founder with 15+ years in enterprise technology solutions"),
        member(2, "Jane Smith", "CTO specializing in cloud architecture and DevOps practices"),
        member(3, "Mike Johnson", "Lead Developer focused on full-stack web and mobile applications"),
    ]
}
