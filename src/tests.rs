//! Search Flow Tests
//!
//! Orchestrator and edit flow driven end to end against an in-memory backend.

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::api::MemberApi;
    use crate::edit::{self, EditCoordinator, MemberField};
    use crate::error::{AppError, AppResult};
    use crate::models::{Member, SearchResponse};
    use crate::search::{drive, Action, AiSearchRequest, Field, Phase, SearchMode, SearchRequest, SearchState};
    use crate::toast::{Subscription, Toast, ToastBus, ToastKind};

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Search(SearchRequest),
        Ai(AiSearchRequest),
        Update(i64, Member),
    }

    /// Backend double answering from scripted queues
    #[derive(Default)]
    struct FakeApi {
        searches: RefCell<VecDeque<AppResult<SearchResponse>>>,
        updates: RefCell<VecDeque<AppResult<Member>>>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeApi {
        fn answer_search(&self, result: AppResult<SearchResponse>) {
            self.searches.borrow_mut().push_back(result);
        }

        fn answer_update(&self, result: AppResult<Member>) {
            self.updates.borrow_mut().push_back(result);
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }

        fn next_search(&self) -> AppResult<SearchResponse> {
            self.searches
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Transport("no response scripted".to_string())))
        }
    }

    #[async_trait(?Send)]
    impl MemberApi for FakeApi {
        async fn search(&self, request: &SearchRequest) -> AppResult<SearchResponse> {
            self.calls.borrow_mut().push(Call::Search(request.clone()));
            self.next_search()
        }

        async fn ai_search(&self, request: &AiSearchRequest) -> AppResult<SearchResponse> {
            self.calls.borrow_mut().push(Call::Ai(request.clone()));
            self.next_search()
        }

        async fn update_member(&self, id: i64, member: &Member) -> AppResult<Member> {
            self.calls.borrow_mut().push(Call::Update(id, member.clone()));
            self.updates
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(AppError::Transport("no response scripted".to_string())))
        }
    }

    struct Harness {
        api: FakeApi,
        state: RefCell<SearchState>,
        editor: RefCell<EditCoordinator>,
        toasts: ToastBus,
        seen: Arc<Mutex<Vec<Toast>>>,
        _subscription: Subscription,
    }

    impl Harness {
        fn new() -> Self {
            let toasts = ToastBus::new();
            let seen = Arc::new(Mutex::new(Vec::new()));
            let sink = seen.clone();
            let subscription = toasts.subscribe(move |t| sink.lock().unwrap().push(t.clone()));
            Self {
                api: FakeApi::default(),
                state: RefCell::new(SearchState::default()),
                editor: RefCell::new(EditCoordinator::default()),
                toasts,
                seen,
                _subscription: subscription,
            }
        }

        async fn dispatch(&self, action: Action) {
            drive(&self.api, &self.state, &self.toasts, action).await;
        }

        async fn fill_valid_form(&self) {
            self.dispatch(Action::SetField(Field::FirstName, "John".to_string())).await;
            self.dispatch(Action::ToggleBusinessUnit("IT".to_string(), true)).await;
        }

        fn state(&self) -> SearchState {
            self.state.borrow().clone()
        }

        fn toasts(&self) -> Vec<(ToastKind, String)> {
            self.seen.lock().unwrap().iter().map(|t| (t.kind, t.message.clone())).collect()
        }
    }

    fn john() -> Member {
        Member {
            id: 1,
            first_name: "John".to_string(),
            middle_name: String::new(),
            last_name: "Doe".to_string(),
            business_unit: "IT".to_string(),
            country: "USA".to_string(),
            source_member_id: "M001".to_string(),
            entitled: Some(true),
        }
    }

    fn page(members: Vec<Member>, total: u64, number: u32) -> SearchResponse {
        SearchResponse {
            content: members,
            total_elements: total,
            total_pages: total.div_ceil(10) as u32,
            number,
            size: 10,
        }
    }

    #[tokio::test]
    async fn test_search_success() {
        let h = Harness::new();
        h.api.answer_search(Ok(page(vec![john()], 1, 0)));

        h.fill_valid_form().await;
        h.dispatch(Action::Search { reset_page: true }).await;

        let state = h.state();
        assert_eq!(state.phase, Phase::Idle);
        assert!(state.has_searched);
        assert_eq!(state.results.members, vec![john()]);
        assert_eq!(state.results.total_count, 1);
        assert_eq!(h.toasts(), vec![(ToastKind::Success, "Found 1 member".to_string())]);

        match &h.api.calls()[..] {
            [Call::Search(req)] => {
                assert_eq!(req.first_name.as_deref(), Some("John"));
                assert_eq!(req.business_units, Some(vec!["IT".to_string()]));
                assert_eq!((req.page, req.size), (0, 10));
            }
            other => panic!("unexpected calls {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invalid_form_never_reaches_backend() {
        let h = Harness::new();
        h.dispatch(Action::SetField(Field::FirstName, "123".to_string())).await;
        h.dispatch(Action::Search { reset_page: true }).await;

        assert!(h.api.calls().is_empty());
        assert!(h.toasts().is_empty());
        assert_eq!(h.state().touched.len(), Field::ALL.len());
    }

    #[tokio::test]
    async fn test_error_fallback_chain() {
        let cases = [
            (AppError::from_response(400, "Bad Request", r#"{"error":{"message":"X"}}"#), "X"),
            (AppError::Transport("Y".to_string()), "Y"),
            (AppError::Transport(String::new()), "Search failed"),
        ];
        for (error, expected) in cases {
            let h = Harness::new();
            h.api.answer_search(Err(error));
            h.fill_valid_form().await;
            h.dispatch(Action::Search { reset_page: true }).await;

            let state = h.state();
            assert_eq!(state.error.as_deref(), Some(expected));
            assert_eq!(state.phase, Phase::Idle);
            assert_eq!(h.toasts(), vec![(ToastKind::Error, expected.to_string())]);
        }
    }

    #[tokio::test]
    async fn test_ai_search() {
        let h = Harness::new();
        h.api.answer_search(Ok(page(vec![], 0, 0)));

        h.dispatch(Action::SwitchMode(SearchMode::NaturalLanguage)).await;
        h.dispatch(Action::SetAiQuery("find engineers in USA".to_string())).await;
        h.dispatch(Action::AiSearch).await;

        assert_eq!(
            h.api.calls(),
            vec![Call::Ai(AiSearchRequest { query: "find engineers in USA".to_string(), page: 0, size: 10 })]
        );
        assert_eq!(h.toasts(), vec![(ToastKind::Success, "Found 0 members".to_string())]);
        assert!(h.state().has_searched);
    }

    #[tokio::test]
    async fn test_blank_ai_query_sends_nothing() {
        let h = Harness::new();
        h.dispatch(Action::SwitchMode(SearchMode::NaturalLanguage)).await;
        h.dispatch(Action::SetAiQuery(" \t ".to_string())).await;
        h.dispatch(Action::AiSearch).await;

        assert!(h.api.calls().is_empty());
        assert_eq!(h.state().phase, Phase::Idle);
    }

    #[tokio::test]
    async fn test_page_change_keeps_page() {
        let h = Harness::new();
        h.api.answer_search(Ok(page(vec![john()], 25, 0)));
        h.api.answer_search(Ok(page(vec![john()], 25, 2)));

        h.fill_valid_form().await;
        h.dispatch(Action::Search { reset_page: true }).await;
        let last = h.state().results.pager().last();
        assert_eq!(last, Some(2));

        h.dispatch(Action::PageChange(2)).await;

        let state = h.state();
        assert_eq!(state.cursor.page, 2);
        assert_eq!(state.results.page, 2);
        assert!(!state.results.pager().can_next());
        match h.api.calls().last() {
            Some(Call::Search(req)) => assert_eq!(req.page, 2),
            other => panic!("unexpected call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mode_switch_then_reset() {
        let h = Harness::new();
        h.api.answer_search(Ok(page(vec![john()], 1, 0)));
        h.fill_valid_form().await;
        h.dispatch(Action::Search { reset_page: true }).await;

        h.dispatch(Action::SwitchMode(SearchMode::NaturalLanguage)).await;
        let state = h.state();
        assert!(!state.has_searched);
        assert!(state.results.members.is_empty());

        h.dispatch(Action::Reset).await;
        let once = h.state();
        h.dispatch(Action::Reset).await;
        assert_eq!(h.state(), once);
        assert!(once.filter.is_empty());
    }

    #[tokio::test]
    async fn test_edit_save_refreshes_current_page() {
        let h = Harness::new();
        h.api.answer_search(Ok(page(vec![john()], 1, 0)));
        h.fill_valid_form().await;
        h.dispatch(Action::Search { reset_page: true }).await;

        let row = h.state().results.members[0].clone();
        h.editor.borrow_mut().open(&row);
        h.editor.borrow_mut().set_field(MemberField::BusinessUnit, "Sales".to_string());

        let saved = Member { business_unit: "Sales".to_string(), ..john() };
        h.api.answer_update(Ok(saved.clone()));
        h.api.answer_search(Ok(page(vec![saved.clone()], 1, 0)));

        let result = edit::save(&h.api, &h.editor, &h.toasts).await;
        assert_eq!(result, Ok(saved.clone()));
        assert!(!h.editor.borrow().is_open());
        // the displayed row was never touched by the edit
        assert_eq!(row.business_unit, "IT");

        h.dispatch(Action::Refresh).await;

        let calls = h.api.calls();
        assert_eq!(calls[1], Call::Update(1, saved.clone()));
        assert!(matches!(&calls[2], Call::Search(req) if req.page == 0));
        assert_eq!(h.state().results.members, vec![saved]);
        assert!(h.toasts().contains(&(ToastKind::Success, "Member updated".to_string())));
    }

    #[tokio::test]
    async fn test_edit_save_failure_keeps_session() {
        let h = Harness::new();
        h.editor.borrow_mut().open(&john());
        h.api.answer_update(Err(AppError::from_response(404, "Not Found", r#"{"message":"Member not found with id: 1"}"#)));

        let result = edit::save(&h.api, &h.editor, &h.toasts).await;

        assert!(result.is_err());
        assert!(h.editor.borrow().is_open());
        assert!(!h.editor.borrow().is_saving());
        assert_eq!(h.toasts(), vec![(ToastKind::Error, "Member not found with id: 1".to_string())]);
    }

    #[tokio::test]
    async fn test_edit_without_id_is_not_sent() {
        let h = Harness::new();
        h.editor.borrow_mut().open(&Member { id: 0, ..john() });

        let result = edit::save(&h.api, &h.editor, &h.toasts).await;

        assert!(matches!(result, Err(AppError::InvalidMember(_))));
        assert!(h.api.calls().is_empty());
        assert_eq!(h.toasts(), vec![(ToastKind::Error, "Member has no valid id".to_string())]);
    }
}
