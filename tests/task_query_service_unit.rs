use std::sync::Arc;

use chrono::NaiveDate;

mod support;

use casa_check_core::application::error::ApplicationError;
use casa_check_core::application::queries::tasks::{
    GetTaskLinkQuery, ResolveTaskSlugQuery, TaskQueryService,
};
use casa_check_core::application::services::ApplicationServices;
use casa_check_core::domain::task::{
    TaskCategory, TaskPriority, TaskReadRepository, TaskStatus, services::TaskSlugService,
};
use casa_check_core::infrastructure::util::DefaultSlugGenerator;
use support::{CountingTaskRepo, EchoSlug, FailingTaskRepo, FixedTestClock, TaskBuilder};

const KITCHEN: &str = "cdae8e90-1a86-480e-985f-1b7112b8d610";
const KITCHEN_TWIN: &str = "cdae8e90-ffff-480e-985f-1b7112b8d610";
const GARDEN: &str = "0badf00d-1a86-480e-985f-1b7112b8d610";

fn seeded_repo() -> Arc<CountingTaskRepo> {
    Arc::new(CountingTaskRepo::new(vec![
        TaskBuilder::new(KITCHEN)
            .title("Cozinha")
            .category(TaskCategory::Kitchen)
            .build(),
        TaskBuilder::new(GARDEN)
            .title("Regar o jardim")
            .category(TaskCategory::Garden)
            .priority(TaskPriority::Urgent)
            .due(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap())
            .build(),
    ]))
}

fn service(repo: Arc<dyn TaskReadRepository>) -> TaskQueryService {
    let slug_service = Arc::new(TaskSlugService::new(Arc::new(DefaultSlugGenerator)));
    TaskQueryService::new(repo, slug_service, Arc::new(FixedTestClock), "/tasks")
}

#[tokio::test]
async fn resolves_prefix_slug_to_task() {
    let repo = seeded_repo();
    let svc = service(repo.clone());

    let task = svc
        .resolve_slug(ResolveTaskSlugQuery {
            slug: "cozinha-cdae8e90".into(),
        })
        .await
        .unwrap();

    assert_eq!(task.id.to_string(), KITCHEN);
    assert_eq!(task.slug, "cozinha-cdae8e90");
    assert_eq!(task.category.label, "Cozinha");
    assert_eq!(repo.prefix_lookups(), 1);
    assert_eq!(repo.id_lookups(), 0);
}

#[tokio::test]
async fn title_part_of_slug_is_ignored() {
    let svc = service(seeded_repo());
    let task = svc
        .resolve_slug(ResolveTaskSlugQuery {
            slug: "titulo-antigo-0BADF00D".into(),
        })
        .await
        .unwrap();
    assert_eq!(task.id.to_string(), GARDEN);
}

#[tokio::test]
async fn full_uuid_slug_uses_exact_lookup() {
    let repo = seeded_repo();
    let svc = service(repo.clone());

    let task = svc
        .resolve_slug(ResolveTaskSlugQuery {
            slug: format!("list-{GARDEN}-extra"),
        })
        .await
        .unwrap();

    assert_eq!(task.id.to_string(), GARDEN);
    assert_eq!(repo.id_lookups(), 1);
    assert_eq!(repo.prefix_lookups(), 0);
}

#[tokio::test]
async fn shared_prefix_is_a_conflict() {
    let repo = Arc::new(CountingTaskRepo::new(vec![
        TaskBuilder::new(KITCHEN).build(),
        TaskBuilder::new(KITCHEN_TWIN).build(),
    ]));
    let svc = service(repo);

    let err = svc
        .resolve_slug(ResolveTaskSlugQuery {
            slug: "limpar-a-casa-cdae8e90".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)));
}

#[tokio::test]
async fn slug_without_identifier_is_not_found() {
    let repo = seeded_repo();
    let svc = service(repo.clone());

    let err = svc
        .resolve_slug(ResolveTaskSlugQuery {
            slug: "just-one-word".into(),
        })
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(repo.prefix_lookups() + repo.id_lookups(), 0);
}

#[tokio::test]
async fn unknown_prefix_is_not_found() {
    let svc = service(seeded_repo());
    let err = svc
        .resolve_slug(ResolveTaskSlugQuery {
            slug: "cozinha-ffffffff".into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn store_failures_propagate() {
    let svc = service(Arc::new(FailingTaskRepo));
    let err = svc
        .resolve_slug(ResolveTaskSlugQuery {
            slug: "cozinha-cdae8e90".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Infrastructure(ref msg) if msg == "store offline"));
}

#[tokio::test]
async fn store_failures_surface_as_infrastructure_for_every_query() {
    let svc = service(Arc::new(FailingTaskRepo));

    let by_uuid = svc
        .resolve_slug(ResolveTaskSlugQuery {
            slug: format!("x-{GARDEN}"),
        })
        .await
        .unwrap_err();
    let link = svc
        .share_link(GetTaskLinkQuery { id: GARDEN.into() })
        .await
        .unwrap_err();
    let list = svc.list_tasks().await.unwrap_err();

    for err in [by_uuid, link, list] {
        assert!(matches!(err, ApplicationError::Infrastructure(_)), "{err:?}");
    }
}

#[tokio::test]
async fn share_link_builds_path_from_slug() {
    let svc = service(seeded_repo());
    let link = svc
        .share_link(GetTaskLinkQuery {
            id: GARDEN.to_uppercase(),
        })
        .await
        .unwrap();

    assert_eq!(link.slug, "regar-o-jardim-0badf00d");
    assert_eq!(link.path, "/tasks/regar-o-jardim-0badf00d");
}

#[tokio::test]
async fn share_link_rejects_bad_id() {
    let svc = service(seeded_repo());
    let err = svc
        .share_link(GetTaskLinkQuery { id: "abc".into() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Validation(_)));
}

#[tokio::test]
async fn share_link_for_missing_task_is_not_found() {
    let svc = service(seeded_repo());
    let err = svc
        .share_link(GetTaskLinkQuery {
            id: KITCHEN_TWIN.into(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_orders_by_priority_then_age_and_flags_overdue() {
    let repo = Arc::new(CountingTaskRepo::new(vec![
        TaskBuilder::new(KITCHEN).title("Velha").created_days_ago(30).build(),
        TaskBuilder::new(KITCHEN_TWIN).title("Nova").created_days_ago(1).build(),
        TaskBuilder::new(GARDEN)
            .title("Urgente")
            .priority(TaskPriority::Urgent)
            .due(NaiveDate::from_ymd_opt(2024, 1, 9).unwrap())
            .build(),
    ]));
    let svc = service(repo);

    let tasks = svc.list_tasks().await.unwrap();
    let titles: Vec<_> = tasks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, ["Urgente", "Velha", "Nova"]);
    assert!(tasks[0].overdue);
    assert!(!tasks[1].overdue);
}

#[tokio::test]
async fn completed_tasks_are_never_overdue() {
    let repo = Arc::new(CountingTaskRepo::new(vec![
        TaskBuilder::new(GARDEN)
            .status(TaskStatus::Completed)
            .due(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
            .build(),
    ]));
    let tasks = service(repo).list_tasks().await.unwrap();
    assert!(!tasks[0].overdue);
    assert_eq!(tasks[0].status_label, "Concluída");
}

#[tokio::test]
async fn slug_service_composes_around_generator_output() {
    let slug_service = TaskSlugService::new(Arc::new(EchoSlug));
    let task = TaskBuilder::new(KITCHEN).title("Raw Title").build();
    assert_eq!(
        slug_service.slug_for(&task).unwrap().as_str(),
        "Raw Title-cdae8e90"
    );
}

#[test]
fn application_services_expose_every_category() {
    let services = ApplicationServices::new(
        seeded_repo(),
        Arc::new(FixedTestClock),
        Arc::new(DefaultSlugGenerator),
        "/tasks",
    );
    let categories = services.categories();
    assert_eq!(categories.len(), TaskCategory::ALL.len());
    assert!(categories.iter().all(|c| !c.icon.is_empty()));
}
