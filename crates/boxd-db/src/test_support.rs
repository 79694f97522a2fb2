//! Shared test utilities for boxd-db tests.

pub(crate) mod helpers {
    use boxd_core::identity::CurrentUser;

    use crate::BoxdDb;
    use crate::service::BoxdService;

    pub fn alice() -> CurrentUser {
        CurrentUser {
            user_id: "user-alice".into(),
            email: "alice@example.com".into(),
        }
    }

    pub fn bob() -> CurrentUser {
        CurrentUser {
            user_id: "user-bob".into(),
            email: "bob@example.com".into(),
        }
    }

    /// In-memory service logged in as alice.
    pub async fn test_service() -> BoxdService {
        test_service_as(alice()).await
    }

    /// In-memory service with a specific identity.
    pub async fn test_service_as(user: CurrentUser) -> BoxdService {
        let db = BoxdDb::open_local(":memory:").await.unwrap();
        BoxdService::from_db(db, Some(user))
    }

    /// In-memory service with no session user.
    pub async fn anon_service() -> BoxdService {
        let db = BoxdDb::open_local(":memory:").await.unwrap();
        BoxdService::from_db(db, None)
    }
}
