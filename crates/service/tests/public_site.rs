use std::sync::Arc;

use models::{Leader, LeaderInput, Partner, PartnerInput, Service, ServiceInput};
use service::public::{category_counts, filter_services, Portrait, PublicSite, ALL};
use service::{ApiClient, Session};

async fn offline_site() -> anyhow::Result<PublicSite<ApiClient>> {
    let client = ApiClient::new(testkit::closed_base_url().await?, Session::in_memory());
    Ok(PublicSite::new(Arc::new(client)))
}

#[tokio::test]
async fn unreachable_api_falls_back_to_placeholders() -> anyhow::Result<()> {
    let site = offline_site().await?;

    assert_eq!(site.about().await, None);

    let team = site.leaders().await;
    let names: Vec<&str> = team.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["John Doe", "Jane Smith", "Mike Johnson"]);
    assert!(matches!(&team[0].portrait, Portrait::Placeholder { initials, .. } if initials == "JD"));

    let services = site.services().await;
    assert_eq!(services.len(), 6);
    assert_eq!(category_counts(&services)[0].count, 6);

    let resources = site.resources().await;
    assert_eq!(resources.len(), 4);
    assert!(resources.iter().all(|r| r.href == "#" && r.cta == "Access Resource"));

    assert!(site.partners().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn empty_team_still_shows_the_defaults() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    let site = PublicSite::new(Arc::new(ApiClient::new(server.base_url(), Session::in_memory())));
    assert_eq!(site.leaders().await.len(), 3);

    server
        .state
        .seed::<Leader>(LeaderInput { name: "Ada Lovelace".into(), photo: Some("ada.png".into()), bio: None })
        .await;
    let team = site.leaders().await;
    assert_eq!(team.len(), 1);
    assert_eq!(team[0].portrait, Portrait::Photo { src: "/assets/leaders/ada.png".into() });
    Ok(())
}

#[tokio::test]
async fn served_content_is_resolved_for_display() -> anyhow::Result<()> {
    let server = testkit::spawn().await?;
    server
        .state
        .seed::<Service>(ServiceInput {
            name: "Web Development".into(),
            slug: "web-development".into(),
            description: "Sites".into(),
            price: 1500.0,
            photo: Some("/src/assets/services/web.jpg".into()),
            category: Some("development".into()),
        })
        .await;
    server
        .state
        .seed::<Partner>(PartnerInput { name: "Acme".into(), logo: Some("C:\\logos\\acme.png".into()), link: None })
        .await;
    let site = PublicSite::new(Arc::new(ApiClient::new(server.base_url(), Session::in_memory())));

    let services = site.services().await;
    assert_eq!(services.len(), 1);
    assert_eq!(services[0].image.as_deref(), Some("/assets/services/web.jpg"));
    assert_eq!(services[0].price_label, "$1500.00");
    assert_eq!(filter_services(&services, "development").len(), 1);
    assert!(filter_services(&services, "security").is_empty());
    assert_eq!(filter_services(&services, ALL).len(), 1);

    // an empty, reachable resources list is shown as is
    assert!(site.resources().await.is_empty());

    let partners = site.partners().await;
    assert_eq!(partners[0].logo.as_deref(), Some("/assets/partners/acme.png"));
    Ok(())
}
