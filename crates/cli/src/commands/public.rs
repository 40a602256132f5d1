use std::sync::Arc;

use common::render_icon;
use serde_json::{json, Value};
use service::contact::{features, ContactFields, ContactForm};
use service::public::{category_counts, kind_counts, tab_icon, PublicSite};
use service::ApiClient;

use super::print_json;
use crate::{ContactArgs, Section};

pub async fn contact(api: &ApiClient, args: ContactArgs) -> anyhow::Result<()> {
    let form = ContactForm::new(ContactFields {
        name: args.name,
        email: args.email,
        subject: args.subject,
        message: args.message,
        company: args.company,
        budget: args.budget,
        timeline: args.timeline,
    });
    let ticket = form.submit(api).await?;
    println!("Thanks! Ticket #{} is {}.", ticket.id, ticket.status);
    Ok(())
}

pub async fn site(api: Arc<ApiClient>, section: Section) -> anyhow::Result<()> {
    let site = PublicSite::new(api);
    let wants = |s: Section| section == Section::All || section == s;
    let mut out = serde_json::Map::new();

    if wants(Section::About) {
        out.insert("about".into(), serde_json::to_value(site.about().await)?);
    }
    if wants(Section::Leaders) {
        out.insert("leaders".into(), serde_json::to_value(site.leaders().await)?);
    }
    if wants(Section::Services) {
        let cards = site.services().await;
        out.insert(
            "services".into(),
            json!({ "tabs": category_counts(&cards), "cards": cards }),
        );
    }
    if wants(Section::Resources) {
        let cards = site.resources().await;
        let tabs: Vec<Value> = kind_counts(&cards)
            .into_iter()
            .map(|t| json!({ "id": t.id, "name": t.name, "count": t.count, "icon": tab_icon(t.id) }))
            .collect();
        out.insert("resources".into(), json!({ "tabs": tabs, "cards": cards }));
    }
    if wants(Section::Partners) {
        let tiles = site.partners().await;
        let value = if tiles.is_empty() { json!("No partners to display") } else { serde_json::to_value(tiles)? };
        out.insert("partners".into(), value);
    }
    if section == Section::All {
        let why: Vec<Value> = features()
            .iter()
            .map(|f| json!({ "icon": render_icon(&f.icon), "title": f.title, "desc": f.desc }))
            .collect();
        out.insert("why_choose_us".into(), Value::Array(why));
    }
    print_json(&Value::Object(out))
}
