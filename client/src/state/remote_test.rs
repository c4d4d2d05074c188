use super::*;

#[test]
fn status_line_reports_loading_and_failures_only() {
    assert_eq!(status_line(Status::Idle, None), None);
    assert_eq!(status_line(Status::Succeeded, None), None);
    assert_eq!(status_line(Status::Loading, None).as_deref(), Some("Loading..."));

    let error = ErrorInfo::new("Teacher not found", "NOT_FOUND");
    assert_eq!(status_line(Status::Failed, Some(&error)).as_deref(), Some("Teacher not found"));
}

#[test]
fn status_line_falls_back_without_error_details() {
    assert_eq!(status_line(Status::Failed, None), Some(ErrorInfo::fallback().message));
}

#[test]
fn reset_invalidates_outstanding_ticket() {
    Owner::new().with(|| {
        let slice: RemoteSignal<u32> = RwSignal::new(RemoteResource::new());
        let ticket = slice.try_update(RemoteResource::begin).expect("live signal");

        reset(slice);

        let settled = slice.try_update(|r| r.settle(ticket, Ok(5)));
        assert_eq!(settled, Some(Settlement::Superseded));
        assert_eq!(slice.get_untracked().status(), Status::Idle);
    });
}
