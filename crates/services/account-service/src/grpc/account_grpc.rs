//! gRPC implementation for AccountService.

use std::sync::Arc;

use tonic::{Request, Response, Status};

use crate::service::AccountService;
use proto::account::{
    account_service_server::AccountService as AccountServiceProto, Account as AccountMessage,
    CreateAccountRequest, GetAccountByEmailRequest, GetAccountByIdRequest,
    GetAccountByUsernameRequest,
};

/// gRPC service wrapper for AccountService.
pub struct AccountGrpcService {
    service: Arc<dyn AccountService>,
}

impl AccountGrpcService {
    /// Create a new gRPC service wrapper.
    pub fn new(service: Arc<dyn AccountService>) -> Self {
        Self { service }
    }
}

#[tonic::async_trait]
impl AccountServiceProto for AccountGrpcService {
    async fn create_account(
        &self,
        request: Request<CreateAccountRequest>,
    ) -> Result<Response<AccountMessage>, Status> {
        let req = request.into_inner();

        let account = self
            .service
            .create_account(req.username, req.email, req.password)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(account_to_proto(&account)))
    }

    async fn get_account_by_id(
        &self,
        request: Request<GetAccountByIdRequest>,
    ) -> Result<Response<AccountMessage>, Status> {
        let req = request.into_inner();

        let account = self
            .service
            .get_account_by_id(&req.id)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(account_to_proto(&account)))
    }

    async fn get_account_by_email(
        &self,
        request: Request<GetAccountByEmailRequest>,
    ) -> Result<Response<AccountMessage>, Status> {
        let req = request.into_inner();

        let account = self
            .service
            .get_account_by_email(&req.email)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(account_to_proto(&account)))
    }

    async fn get_account_by_username(
        &self,
        request: Request<GetAccountByUsernameRequest>,
    ) -> Result<Response<AccountMessage>, Status> {
        let req = request.into_inner();

        let account = self
            .service
            .get_account_by_username(&req.username)
            .await
            .map_err(Status::from)?;
        Ok(Response::new(account_to_proto(&account)))
    }
}

/// Convert domain Account to proto Account (includes the credential hash).
fn account_to_proto(account: &domain::Account) -> AccountMessage {
    AccountMessage {
        id: account.id.map(|id| id.to_string()).unwrap_or_default(),
        username: account.username.clone(),
        email: account.email.clone(),
        credential_hash: account.credential_hash.clone(),
    }
}
