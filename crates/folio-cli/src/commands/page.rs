//! Commands that render all or part of the portfolio page.

use super::{AppContext, SourceArgs};
use crate::render;
use anyhow::{Result, bail};
use folio_core::list::ListController;
use folio_core::project::ProjectType;

pub async fn show(ctx: &AppContext, source: &SourceArgs) -> Result<()> {
    let use_case = ctx.page_use_case(source).await?;
    let page = use_case.load(source.profile_id()).await?;
    let palette = &ctx.palette;
    let today = chrono::Local::now().date_naive();
    let phone = page.snapshot.profile.phone.as_deref();

    println!("{}", render::profile(&page.snapshot.profile, palette));
    println!("{}", render::projects(&page.projects, phone, palette));
    for group in &page.skills {
        println!("{}", render::skills(&group.category, &group.list, palette));
    }
    println!("{}", render::work_experiences(&page.work_experiences, palette));
    println!("{}", render::educations(&page.snapshot.educations, palette));
    println!("{}", render::languages(&page.snapshot.languages, palette));
    println!(
        "{}",
        render::certifications(&page.snapshot.certifications, today, palette)
    );
    Ok(())
}

pub async fn projects(
    ctx: &AppContext,
    source: &SourceArgs,
    filter: &str,
    page_number: usize,
) -> Result<()> {
    let options = ProjectType::filter_options();
    if !options.iter().any(|option| *option == filter) {
        bail!(
            "Unknown project type '{}' (expected one of: {})",
            filter,
            options.join(", ")
        );
    }

    let use_case = ctx.page_use_case(source).await?;
    let mut page = use_case.load(source.profile_id()).await?;
    page.projects.apply_filter(filter);
    page.projects.go_to_page(page_number);

    let phone = page.snapshot.profile.phone.as_deref();
    println!("{}", render::projects(&page.projects, phone, &ctx.palette));
    Ok(())
}

pub async fn skills(
    ctx: &AppContext,
    source: &SourceArgs,
    category: Option<&str>,
    page_number: usize,
) -> Result<()> {
    let gateway = ctx.gateway(source).await?;
    let groups = gateway.skills_by_category(source.profile_id()).await?;

    if let Some(category) = category.filter(|wanted| groups.get(wanted).is_none()) {
        let known: Vec<&str> = groups.categories().collect();
        bail!(
            "No skills in category '{}' (available: {})",
            category,
            known.join(", ")
        );
    }

    for group in groups {
        if category.is_some_and(|wanted| wanted != group.category) {
            continue;
        }
        let mut list = ListController::new(group.skills, ctx.config.pagination.skills);
        list.go_to_page(page_number);
        println!("{}", render::skills(&group.category, &list, &ctx.palette));
    }
    Ok(())
}

pub async fn experience(ctx: &AppContext, source: &SourceArgs, page_number: usize) -> Result<()> {
    let gateway = ctx.gateway(source).await?;
    let snapshot = gateway.fetch_portfolio(source.profile_id()).await?;

    let mut list = ListController::new(
        snapshot.work_experiences,
        ctx.config.pagination.work_experiences,
    );
    list.go_to_page(page_number);
    println!("{}", render::work_experiences(&list, &ctx.palette));
    Ok(())
}

pub async fn featured(ctx: &AppContext, source: &SourceArgs) -> Result<()> {
    let gateway = ctx.gateway(source).await?;
    let profile = gateway
        .find_profile(&gateway.resolve_profile_id(source.profile_id())?)
        .await?;
    let featured = gateway.featured_projects_of(&profile).await?;
    let enriched = ctx.enrichment().enrich(featured).await;

    // One page holding every featured project.
    let list = ListController::new(enriched, usize::MAX);
    println!(
        "{}",
        render::projects(&list, profile.phone.as_deref(), &ctx.palette)
    );
    Ok(())
}
