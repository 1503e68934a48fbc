use super::test_harness::{setup_view_harness, StubApi, ViewKind};

#[tokio::test(flavor = "current_thread")]
async fn login_view_renders_the_shared_form() {
    let mut harness = setup_view_harness(ViewKind::Login, StubApi::default());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Sign in"), "missing title in {html}");
    assert!(html.contains("login-email"), "missing email field in {html}");
    assert!(
        html.contains("Forgot password?"),
        "missing recovery link in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_smoke_renders_banner_tiles_and_subject_card() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, StubApi::default());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Hello, Ana!"), "missing greeting in {html}");
    assert!(html.contains("42%"), "missing subject percent in {html}");
    assert!(html.contains("1 of 2"), "missing lesson tile in {html}");
    assert!(html.contains("View lessons"), "missing card link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn video_classes_smoke_merges_progress_badges() {
    let mut harness = setup_view_harness(ViewKind::VideoClasses, StubApi::default());
    harness.settle().await;

    let html = harness.render();
    // Lesson 2 is completed in the stub progress map, lesson 1 is not.
    assert!(html.contains("Derivatives"), "missing lesson in {html}");
    assert!(html.contains("Watched"), "missing completion badge in {html}");
    assert!(html.contains("Mark watched"), "missing mark action in {html}");
    assert!(
        html.contains("Showing 1-2 of 2"),
        "missing pagination summary in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn video_classes_smoke_renders_error_state_with_retry() {
    let api = StubApi {
        fail_lists: true,
        ..StubApi::default()
    };
    let mut harness = setup_view_harness(ViewKind::VideoClasses, api);
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Something went wrong"),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"), "missing retry in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summaries_smoke_renders_read_badge() {
    let mut harness = setup_view_harness(ViewKind::Summaries, StubApi::default());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Key ideas"), "missing summary in {html}");
    assert!(html.contains("Read"), "missing read badge in {html}");
    assert!(html.contains("Open"), "missing detail link in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn summary_detail_smoke_renders_sanitized_markdown() {
    let mut harness = setup_view_harness(ViewKind::SummaryDetail(1), StubApi::default());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("<h1>"), "missing rendered heading in {html}");
    assert!(html.contains("Mark as read"), "missing mark action in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn practice_exam_smoke_renders_the_start_screen() {
    let mut harness = setup_view_harness(ViewKind::PracticeExam, StubApi::default());
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Practice exam"), "missing title in {html}");
    assert!(html.contains("Start exam"), "missing start button in {html}");
    assert!(html.contains("Math"), "missing subject option in {html}");
}
