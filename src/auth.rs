use actix_web::HttpRequest;
use diesel::PgConnection;

use crate::errors::ServerError;
use crate::models::parse_public_id;
use crate::models::user::Role;
use crate::repository;

pub const ORG_ID_HEADER: &str = "X-Org-ID";
pub const USER_ID_HEADER: &str = "X-User-ID";

const MISSING_HEADERS: &str = "X-Org-ID and X-User-ID headers required";
const INVALID_IDENTITY: &str = "Invalid user or organization";

/// A caller identity resolved against the user store. Everything tenant
/// scoping needs downstream lives here.
#[derive(Clone, Debug)]
pub struct Identity {
    pub user_id: i32,
    pub org_id: i32,
    pub role: Role,
}

/// Both identity headers are required together; a request carrying only one
/// is as unauthenticated as one carrying neither.
pub fn identity_headers(req: &HttpRequest) -> Result<(String, String), ServerError> {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned)
    };
    match (header(ORG_ID_HEADER), header(USER_ID_HEADER)) {
        (Some(org), Some(user)) => Ok((org, user)),
        _ => Err(ServerError::Unauthenticated(MISSING_HEADERS)),
    }
}

/// Loads the user pinned to the claimed organization. The (user, org) pair
/// must match a single stored record; a user id that exists under another
/// tenant fails the same way as one that does not exist. Malformed ids fold
/// into the same unauthenticated condition.
pub fn resolve_identity(
    req: &HttpRequest,
    connection: &mut PgConnection,
) -> Result<Identity, ServerError> {
    let (org, user) = identity_headers(req)?;
    let org = match parse_public_id(&org) {
        Some(parsed) => parsed,
        None => return Err(ServerError::Unauthenticated(INVALID_IDENTITY)),
    };
    match repository::user::get(connection, &user, Some(org))? {
        Some(user) => Ok(Identity {
            user_id: user.id,
            org_id: user.org_id,
            role: user.role,
        }),
        None => Err(ServerError::Unauthenticated(INVALID_IDENTITY)),
    }
}

pub fn require_role(identity: &Identity, allowed: &[Role]) -> Result<(), ServerError> {
    if allowed.contains(&identity.role) {
        Ok(())
    } else {
        Err(ServerError::Forbidden)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn identity(role: Role) -> Identity {
        Identity {
            user_id: 1,
            org_id: 1,
            role,
        }
    }

    #[test]
    fn missing_headers_are_unauthenticated() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(
            identity_headers(&req),
            Err(ServerError::Unauthenticated(MISSING_HEADERS))
        );
    }

    #[test]
    fn one_header_alone_is_unauthenticated() {
        let req = TestRequest::default()
            .insert_header((ORG_ID_HEADER, "1"))
            .to_http_request();
        assert_eq!(
            identity_headers(&req),
            Err(ServerError::Unauthenticated(MISSING_HEADERS))
        );
    }

    #[test]
    fn headers_are_read_case_insensitively() {
        let req = TestRequest::default()
            .insert_header(("x-org-id", "7"))
            .insert_header(("x-user-id", "12"))
            .to_http_request();
        assert_eq!(
            identity_headers(&req),
            Ok(("7".to_owned(), "12".to_owned()))
        );
    }

    #[test]
    fn reader_cannot_pass_a_writer_gate() {
        let caller = identity(Role::Reader);
        assert_eq!(
            require_role(&caller, &[Role::Writer, Role::Admin]),
            Err(ServerError::Forbidden)
        );
    }

    #[test]
    fn writer_cannot_pass_the_admin_gate() {
        let caller = identity(Role::Writer);
        assert_eq!(require_role(&caller, &[Role::Admin]), Err(ServerError::Forbidden));
    }

    #[test]
    fn allowed_roles_pass() {
        assert!(require_role(&identity(Role::Writer), &[Role::Writer, Role::Admin]).is_ok());
        assert!(require_role(&identity(Role::Admin), &[Role::Admin]).is_ok());
    }
}
