use std::sync::Arc;

use dashtour_core::model::{HotspotId, ModuleId, RouteTarget};
use dashtour_core::time::fixed_clock;
use services::session::{Effect, ModuleSessionService, Phase, SessionEvent};
use services::{Clock, ModuleCatalog};
use storage::repository::{InMemoryRepository, ProgressRepository};

fn service(repo: &InMemoryRepository) -> ModuleSessionService {
    let catalog = Arc::new(ModuleCatalog::builtin().unwrap());
    ModuleSessionService::new(fixed_clock(), catalog, Arc::new(repo.clone()))
}

fn hotspot(raw: &str) -> HotspotId {
    HotspotId::new(raw).unwrap()
}

#[tokio::test]
async fn module_one_full_walk_persists_progress() {
    let repo = InMemoryRepository::new();
    let service = service(&repo);
    let mut session = service.start(ModuleId::new(1)).unwrap();

    for id in [
        "instrument_cluster",
        "infotainment_screen",
        "climate_panel",
        "steering_controls",
    ] {
        service
            .apply(&mut session, SessionEvent::ConfirmHotspot(hotspot(id)))
            .await
            .unwrap();
    }
    assert_eq!(session.phase(), Phase::QuizPending);

    // Wrong answer: quiz stays pending, nothing persisted.
    let wrong = service
        .apply(&mut session, SessionEvent::AnswerQuiz(0))
        .await
        .unwrap();
    assert_eq!(wrong.transition.phase, Phase::QuizPending);
    assert!(wrong.saved_progress.is_none());
    assert!(repo.load_progress().await.unwrap().is_none());

    // Correct answer: completion fires, snapshot lands in storage.
    let right = service
        .apply(&mut session, SessionEvent::AnswerQuiz(2))
        .await
        .unwrap();
    assert_eq!(right.transition.phase, Phase::Completed);

    let target = right.transition.effects.iter().find_map(|effect| match effect {
        Effect::NavigateAfter { target, .. } => Some(*target),
        _ => None,
    });
    assert_eq!(target, Some(RouteTarget::Module(ModuleId::new(2))));

    let snapshot = right.saved_progress.unwrap();
    assert_eq!(snapshot.current_module(), 1);
    assert_eq!(snapshot.total_modules(), 11);

    let persisted = repo.load_progress().await.unwrap().unwrap();
    assert_eq!(persisted, snapshot);
}

#[tokio::test]
async fn manual_advance_covers_the_whole_tutorial_chain() {
    let repo = InMemoryRepository::new();
    let service = service(&repo);
    let catalog = service.catalog().clone();

    // Walk the data-driven chain in fallback style, module by module.
    let mut current = ModuleId::new(1);
    let mut completed = Vec::new();
    loop {
        let mut session = service.start(current).unwrap();
        let next = loop {
            let applied = service
                .apply(&mut session, SessionEvent::ManualAdvance)
                .await
                .unwrap();
            if session.quiz_visible() {
                let quiz = session.module().quiz().unwrap().correct_index();
                let applied = service
                    .apply(&mut session, SessionEvent::AnswerQuiz(quiz))
                    .await
                    .unwrap();
                break applied.transition.effects;
            }
            if session.is_complete() {
                break applied.transition.effects;
            }
        };
        completed.push(current.value());

        match next.iter().find_map(|effect| match effect {
            services::Effect::NavigateAfter { target, .. } => Some(*target),
            _ => None,
        }) {
            Some(RouteTarget::Module(next_id)) => current = next_id,
            Some(RouteTarget::Complete) => break,
            other => panic!("unexpected navigation target: {other:?}"),
        }
    }

    assert_eq!(completed.len() as u32, catalog.total_modules());

    let snapshot = repo.load_progress().await.unwrap().unwrap();
    assert_eq!(snapshot.current_module(), 11);
}

#[tokio::test]
async fn progress_snapshot_uses_the_service_clock() {
    let repo = InMemoryRepository::new();
    let catalog = Arc::new(ModuleCatalog::builtin().unwrap());
    let now = dashtour_core::time::fixed_now();
    let service = ModuleSessionService::new(Clock::fixed(now), catalog, Arc::new(repo.clone()));

    let snapshot = service.record_completion(ModuleId::new(4)).await.unwrap();
    assert_eq!(snapshot.last_updated(), now);
}
