//! Typed calls to the casino backend canister.
//!
//! Queries go out as query calls and state changes as update calls. A call
//! that failed before reaching the replica is retried with exponential
//! backoff; anything the replica answered is returned as is.
use crate::lib::diagnosis::DiagnosedError;
use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::retryable::backoff_error;
use anyhow::{anyhow, Context};
use backoff::future::retry;
use backoff::ExponentialBackoff;
use candid::utils::{ArgumentDecoder, ArgumentEncoder};
use candid::{Nat, Principal};
use fn_error_context::context;
use ic_agent::Agent;
use ic_utils::call::{AsyncCall, SyncCall};
use ic_utils::Canister;
use portal_core::admin::UserRole;
use portal_core::currency::Currency;
use portal_core::profile::{Profile, ProfileUpdate};
use slog::{trace, Logger};

const ADJUST_USER_BALANCE: &str = "adjustUserBalance";
const ASSIGN_CALLER_USER_ROLE: &str = "assignCallerUserRole";
const CONFIRM_DEPOSIT: &str = "confirmDeposit";
const GET_CALLER_USER_PROFILE: &str = "getCallerUserProfile";
const GET_CALLER_USER_ROLE: &str = "getCallerUserRole";
const GET_TOTAL_MEMBER_COUNT: &str = "getTotalMemberCount";
const GET_USER_PROFILE: &str = "getUserProfile";
const INITIATE_DEPOSIT: &str = "initiateDeposit";
const IS_CALLER_ADMIN: &str = "isCallerAdmin";
const RECORD_ADMIN_DEPOSIT: &str = "recordAdminDeposit";
const RECORD_WIN: &str = "recordWin";
const RELEASE_WINNINGS_TO_USER: &str = "releaseWinningsToUser";
const SAVE_CALLER_USER_PROFILE: &str = "saveCallerUserProfile";

pub struct BackendClient<'a> {
    canister: Canister<'a>,
    logger: Logger,
}

impl<'a> BackendClient<'a> {
    pub fn new(agent: &'a Agent, canister_id: Principal, logger: Logger) -> PortalResult<Self> {
        let canister = Canister::builder()
            .with_agent(agent)
            .with_canister_id(canister_id)
            .build()?;
        Ok(BackendClient { canister, logger })
    }

    /// Client for the configured backend, using the environment's agent.
    #[context("Failed to create the backend client.")]
    pub fn from_env(env: &'a dyn Environment) -> PortalResult<Self> {
        let agent = env
            .get_agent()
            .ok_or_else(|| anyhow!("Cannot get HTTP client from environment."))?;
        let canister_id = env
            .get_backend_canister_id()
            .ok_or_else(|| {
                DiagnosedError::new(
                    "The portal does not know which canister is the casino backend.",
                    "Set it with 'portal config set backend_canister_id <id>' or pass --backend <id>.",
                )
            })
            .context("No backend canister configured.")?;
        Self::new(agent, canister_id, env.get_logger().clone())
    }

    async fn query<A, R>(&self, method: &str, args: A) -> PortalResult<R>
    where
        A: ArgumentEncoder + Clone + Send + Sync,
        R: for<'de> ArgumentDecoder<'de> + Send + Sync,
    {
        trace!(self.logger, "query {}", method);
        retry(ExponentialBackoff::default(), || {
            let args = args.clone();
            async move {
                self.canister
                    .query(method)
                    .with_args(args)
                    .build::<R>()
                    .call()
                    .await
                    .map_err(backoff_error)
            }
        })
        .await
        .with_context(|| format!("Failed to query '{method}' on the backend."))
    }

    async fn update<A, R>(&self, method: &str, args: A) -> PortalResult<R>
    where
        A: ArgumentEncoder + Clone + Send + Sync,
        R: for<'de> ArgumentDecoder<'de> + Send + Sync,
    {
        trace!(self.logger, "update {}", method);
        retry(ExponentialBackoff::default(), || {
            let args = args.clone();
            async move {
                self.canister
                    .update(method)
                    .with_args(args)
                    .build::<R>()
                    .call_and_wait()
                    .await
                    .map_err(backoff_error)
            }
        })
        .await
        .with_context(|| format!("Failed to call '{method}' on the backend."))
    }

    pub async fn is_caller_admin(&self) -> PortalResult<bool> {
        let (is_admin,) = self.query(IS_CALLER_ADMIN, ()).await?;
        Ok(is_admin)
    }

    pub async fn get_caller_user_role(&self) -> PortalResult<UserRole> {
        let (role,) = self.query(GET_CALLER_USER_ROLE, ()).await?;
        Ok(role)
    }

    pub async fn get_caller_user_profile(&self) -> PortalResult<Option<Profile>> {
        let (profile,) = self.query(GET_CALLER_USER_PROFILE, ()).await?;
        Ok(profile)
    }

    pub async fn get_user_profile(&self, user: Principal) -> PortalResult<Option<Profile>> {
        let (profile,) = self.query(GET_USER_PROFILE, (user,)).await?;
        Ok(profile)
    }

    pub async fn get_total_member_count(&self) -> PortalResult<Nat> {
        let (count,) = self.query(GET_TOTAL_MEMBER_COUNT, ()).await?;
        Ok(count)
    }

    pub async fn save_caller_user_profile(&self, profile: ProfileUpdate) -> PortalResult {
        self.update(SAVE_CALLER_USER_PROFILE, (profile,)).await
    }

    /// Returns the id of the pending deposit transaction.
    pub async fn initiate_deposit(&self, currency: Currency, amount: u64) -> PortalResult<Nat> {
        let (transaction_id,) = self
            .update(INITIATE_DEPOSIT, (currency, Nat::from(amount)))
            .await?;
        Ok(transaction_id)
    }

    pub async fn confirm_deposit(&self, transaction_id: u64) -> PortalResult {
        self.update(CONFIRM_DEPOSIT, (Nat::from(transaction_id),))
            .await
    }

    /// Returns the id of the recorded transaction.
    pub async fn record_admin_deposit(&self, currency: Currency, amount: u64) -> PortalResult<Nat> {
        let (transaction_id,) = self
            .update(RECORD_ADMIN_DEPOSIT, (currency, Nat::from(amount)))
            .await?;
        Ok(transaction_id)
    }

    pub async fn record_win(&self, user: Principal, amount: u64) -> PortalResult {
        self.update(RECORD_WIN, (user, Nat::from(amount))).await
    }

    pub async fn adjust_user_balance(&self, user: Principal, balance: u64) -> PortalResult {
        self.update(ADJUST_USER_BALANCE, (user, Nat::from(balance)))
            .await
    }

    pub async fn assign_caller_user_role(&self, user: Principal, role: UserRole) -> PortalResult {
        self.update(ASSIGN_CALLER_USER_ROLE, (user, role)).await
    }

    pub async fn release_winnings_to_user(&self, user: Principal) -> PortalResult {
        self.update(RELEASE_WINNINGS_TO_USER, (user,)).await
    }
}
