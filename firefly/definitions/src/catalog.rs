//! The route registry.
//!
//! Every shipped route has a [`RouteId`]. The registry is built once, on
//! first use, and is read-only afterwards.
//!
//! ## Examples
//!
//! ```
//! use firefly_definitions::{RouteId, find};
//! use firefly_define::RestMethod;
//!
//! let route = RouteId::GetAccount.route();
//! assert_eq!(route.path, "/v1/accounts/{id}");
//! assert_eq!(RouteId::GetAccount.to_string(), "getAccount");
//!
//! let found = find(RestMethod::Get, "/v1/accounts/42").unwrap();
//! assert_eq!(found.id, "getAccount");
//! ```

use firefly_define::{RestMethod, Route};
use lazy_static::lazy_static;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator};

use crate::{
    about, accounts, attachments, autocomplete, bills, budgets, categories, configuration,
    currencies, data, links, piggy_banks, preferences, recurrences, rule_groups, rules, search,
    summary, tags, transactions, users, webhooks,
};

/// Identifier of a shipped route. Displays as the route's camelCase id.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString,
)]
#[strum(serialize_all = "camelCase")]
pub enum RouteId {
    // about
    GetAbout,
    GetCurrentUser,
    // accounts
    ListAccount,
    StoreAccount,
    GetAccount,
    UpdateAccount,
    DeleteAccount,
    ListTransactionByAccount,
    ListAttachmentByAccount,
    // attachments
    ListAttachment,
    StoreAttachment,
    GetAttachment,
    UpdateAttachment,
    DeleteAttachment,
    DownloadAttachment,
    UploadAttachment,
    // autocomplete
    GetAccountsAc,
    GetCategoriesAc,
    GetCurrenciesAc,
    GetTagAc,
    GetTransactionsAc,
    GetTransactionTypesAc,
    // categories
    ListCategory,
    StoreCategory,
    GetCategory,
    UpdateCategory,
    DeleteCategory,
    ListTransactionByCategory,
    // configuration
    GetConfiguration,
    GetSingleConfiguration,
    SetConfiguration,
    // currencies
    ListCurrency,
    StoreCurrency,
    GetDefaultCurrency,
    GetCurrency,
    UpdateCurrency,
    DeleteCurrency,
    EnableCurrency,
    DisableCurrency,
    DefaultCurrency,
    ListAccountByCurrency,
    // data
    ExportTransactions,
    BulkUpdateTransactions,
    PurgeData,
    // preferences
    ListPreference,
    StorePreference,
    GetPreference,
    UpdatePreference,
    // search
    SearchAccounts,
    SearchTransactions,
    // tags
    ListTag,
    StoreTag,
    GetTag,
    UpdateTag,
    DeleteTag,
    ListTransactionByTag,
    // transactions
    ListTransaction,
    StoreTransaction,
    GetTransaction,
    UpdateTransaction,
    DeleteTransaction,
    ListAttachmentByTransaction,
    // webhooks
    ListWebhook,
    StoreWebhook,
    GetWebhook,
    UpdateWebhook,
    DeleteWebhook,
    SubmitWebhook,
    TriggerTransactionWebhook,
    GetWebhookMessages,
    GetSingleWebhookMessage,
    DeleteWebhookMessage,
    GetWebhookMessageAttempts,
    GetSingleWebhookMessageAttempt,
    DeleteWebhookMessageAttempt,
    // rules
    ListRule,
    StoreRule,
    GetRule,
    UpdateRule,
    DeleteRule,
    TestRule,
    FireRule,
    // rule groups
    ListRuleGroup,
    StoreRuleGroup,
    GetRuleGroup,
    UpdateRuleGroup,
    DeleteRuleGroup,
    ListRuleByGroup,
    TestRuleGroup,
    FireRuleGroup,
    // recurrences
    ListRecurrence,
    StoreRecurrence,
    GetRecurrence,
    UpdateRecurrence,
    DeleteRecurrence,
    ListTransactionByRecurrence,
    // piggy banks
    ListPiggyBank,
    StorePiggyBank,
    GetPiggyBank,
    UpdatePiggyBank,
    DeletePiggyBank,
    ListEventByPiggyBank,
    ListAttachmentByPiggyBank,
    // budgets
    ListBudget,
    StoreBudget,
    GetBudget,
    UpdateBudget,
    DeleteBudget,
    ListTransactionByBudget,
    ListAttachmentByBudget,
    // bills
    ListBill,
    StoreBill,
    GetBill,
    UpdateBill,
    DeleteBill,
    ListAttachmentByBill,
    ListRuleByBill,
    ListTransactionByBill,
    // links
    ListLinkType,
    StoreLinkType,
    GetLinkType,
    UpdateLinkType,
    DeleteLinkType,
    ListTransactionByLinkType,
    ListTransactionLink,
    StoreTransactionLink,
    GetTransactionLink,
    UpdateTransactionLink,
    DeleteTransactionLink,
    // users
    ListUser,
    StoreUser,
    GetUser,
    UpdateUser,
    DeleteUser,
    // summary
    GetBasicSummary,
    GetChartAccountOverview,
}

impl RouteId {
    /// Returns the route descriptor.
    pub fn route(self) -> &'static Route {
        &CATALOG[self as usize]
    }

    fn define(self) -> Route {
        match self {
            Self::GetAbout => about::get_about(),
            Self::GetCurrentUser => about::get_current_user(),

            Self::ListAccount => accounts::list_account(),
            Self::StoreAccount => accounts::store_account(),
            Self::GetAccount => accounts::get_account(),
            Self::UpdateAccount => accounts::update_account(),
            Self::DeleteAccount => accounts::delete_account(),
            Self::ListTransactionByAccount => accounts::list_transaction_by_account(),
            Self::ListAttachmentByAccount => accounts::list_attachment_by_account(),

            Self::ListAttachment => attachments::list_attachment(),
            Self::StoreAttachment => attachments::store_attachment(),
            Self::GetAttachment => attachments::get_attachment(),
            Self::UpdateAttachment => attachments::update_attachment(),
            Self::DeleteAttachment => attachments::delete_attachment(),
            Self::DownloadAttachment => attachments::download_attachment(),
            Self::UploadAttachment => attachments::upload_attachment(),

            Self::GetAccountsAc => autocomplete::get_accounts_ac(),
            Self::GetCategoriesAc => autocomplete::get_categories_ac(),
            Self::GetCurrenciesAc => autocomplete::get_currencies_ac(),
            Self::GetTagAc => autocomplete::get_tag_ac(),
            Self::GetTransactionsAc => autocomplete::get_transactions_ac(),
            Self::GetTransactionTypesAc => autocomplete::get_transaction_types_ac(),

            Self::ListCategory => categories::list_category(),
            Self::StoreCategory => categories::store_category(),
            Self::GetCategory => categories::get_category(),
            Self::UpdateCategory => categories::update_category(),
            Self::DeleteCategory => categories::delete_category(),
            Self::ListTransactionByCategory => categories::list_transaction_by_category(),

            Self::GetConfiguration => configuration::get_configuration(),
            Self::GetSingleConfiguration => configuration::get_single_configuration(),
            Self::SetConfiguration => configuration::set_configuration(),

            Self::ListCurrency => currencies::list_currency(),
            Self::StoreCurrency => currencies::store_currency(),
            Self::GetDefaultCurrency => currencies::get_default_currency(),
            Self::GetCurrency => currencies::get_currency(),
            Self::UpdateCurrency => currencies::update_currency(),
            Self::DeleteCurrency => currencies::delete_currency(),
            Self::EnableCurrency => currencies::enable_currency(),
            Self::DisableCurrency => currencies::disable_currency(),
            Self::DefaultCurrency => currencies::default_currency(),
            Self::ListAccountByCurrency => currencies::list_account_by_currency(),

            Self::ExportTransactions => data::export_transactions(),
            Self::BulkUpdateTransactions => data::bulk_update_transactions(),
            Self::PurgeData => data::purge_data(),

            Self::ListPreference => preferences::list_preference(),
            Self::StorePreference => preferences::store_preference(),
            Self::GetPreference => preferences::get_preference(),
            Self::UpdatePreference => preferences::update_preference(),

            Self::SearchAccounts => search::search_accounts(),
            Self::SearchTransactions => search::search_transactions(),

            Self::ListTag => tags::list_tag(),
            Self::StoreTag => tags::store_tag(),
            Self::GetTag => tags::get_tag(),
            Self::UpdateTag => tags::update_tag(),
            Self::DeleteTag => tags::delete_tag(),
            Self::ListTransactionByTag => tags::list_transaction_by_tag(),

            Self::ListTransaction => transactions::list_transaction(),
            Self::StoreTransaction => transactions::store_transaction(),
            Self::GetTransaction => transactions::get_transaction(),
            Self::UpdateTransaction => transactions::update_transaction(),
            Self::DeleteTransaction => transactions::delete_transaction(),
            Self::ListAttachmentByTransaction => transactions::list_attachment_by_transaction(),

            Self::ListWebhook => webhooks::list_webhook(),
            Self::StoreWebhook => webhooks::store_webhook(),
            Self::GetWebhook => webhooks::get_webhook(),
            Self::UpdateWebhook => webhooks::update_webhook(),
            Self::DeleteWebhook => webhooks::delete_webhook(),
            Self::SubmitWebhook => webhooks::submit_webhook(),
            Self::TriggerTransactionWebhook => webhooks::trigger_transaction_webhook(),
            Self::GetWebhookMessages => webhooks::get_webhook_messages(),
            Self::GetSingleWebhookMessage => webhooks::get_single_webhook_message(),
            Self::DeleteWebhookMessage => webhooks::delete_webhook_message(),
            Self::GetWebhookMessageAttempts => webhooks::get_webhook_message_attempts(),
            Self::GetSingleWebhookMessageAttempt => {
                webhooks::get_single_webhook_message_attempt()
            }
            Self::DeleteWebhookMessageAttempt => webhooks::delete_webhook_message_attempt(),

            Self::ListRule => rules::list_rule(),
            Self::StoreRule => rules::store_rule(),
            Self::GetRule => rules::get_rule(),
            Self::UpdateRule => rules::update_rule(),
            Self::DeleteRule => rules::delete_rule(),
            Self::TestRule => rules::test_rule(),
            Self::FireRule => rules::fire_rule(),

            Self::ListRuleGroup => rule_groups::list_rule_group(),
            Self::StoreRuleGroup => rule_groups::store_rule_group(),
            Self::GetRuleGroup => rule_groups::get_rule_group(),
            Self::UpdateRuleGroup => rule_groups::update_rule_group(),
            Self::DeleteRuleGroup => rule_groups::delete_rule_group(),
            Self::ListRuleByGroup => rule_groups::list_rule_by_group(),
            Self::TestRuleGroup => rule_groups::test_rule_group(),
            Self::FireRuleGroup => rule_groups::fire_rule_group(),

            Self::ListRecurrence => recurrences::list_recurrence(),
            Self::StoreRecurrence => recurrences::store_recurrence(),
            Self::GetRecurrence => recurrences::get_recurrence(),
            Self::UpdateRecurrence => recurrences::update_recurrence(),
            Self::DeleteRecurrence => recurrences::delete_recurrence(),
            Self::ListTransactionByRecurrence => recurrences::list_transaction_by_recurrence(),

            Self::ListPiggyBank => piggy_banks::list_piggy_bank(),
            Self::StorePiggyBank => piggy_banks::store_piggy_bank(),
            Self::GetPiggyBank => piggy_banks::get_piggy_bank(),
            Self::UpdatePiggyBank => piggy_banks::update_piggy_bank(),
            Self::DeletePiggyBank => piggy_banks::delete_piggy_bank(),
            Self::ListEventByPiggyBank => piggy_banks::list_event_by_piggy_bank(),
            Self::ListAttachmentByPiggyBank => piggy_banks::list_attachment_by_piggy_bank(),

            Self::ListBudget => budgets::list_budget(),
            Self::StoreBudget => budgets::store_budget(),
            Self::GetBudget => budgets::get_budget(),
            Self::UpdateBudget => budgets::update_budget(),
            Self::DeleteBudget => budgets::delete_budget(),
            Self::ListTransactionByBudget => budgets::list_transaction_by_budget(),
            Self::ListAttachmentByBudget => budgets::list_attachment_by_budget(),

            Self::ListBill => bills::list_bill(),
            Self::StoreBill => bills::store_bill(),
            Self::GetBill => bills::get_bill(),
            Self::UpdateBill => bills::update_bill(),
            Self::DeleteBill => bills::delete_bill(),
            Self::ListAttachmentByBill => bills::list_attachment_by_bill(),
            Self::ListRuleByBill => bills::list_rule_by_bill(),
            Self::ListTransactionByBill => bills::list_transaction_by_bill(),

            Self::ListLinkType => links::list_link_type(),
            Self::StoreLinkType => links::store_link_type(),
            Self::GetLinkType => links::get_link_type(),
            Self::UpdateLinkType => links::update_link_type(),
            Self::DeleteLinkType => links::delete_link_type(),
            Self::ListTransactionByLinkType => links::list_transaction_by_link_type(),
            Self::ListTransactionLink => links::list_transaction_link(),
            Self::StoreTransactionLink => links::store_transaction_link(),
            Self::GetTransactionLink => links::get_transaction_link(),
            Self::UpdateTransactionLink => links::update_transaction_link(),
            Self::DeleteTransactionLink => links::delete_transaction_link(),

            Self::ListUser => users::list_user(),
            Self::StoreUser => users::store_user(),
            Self::GetUser => users::get_user(),
            Self::UpdateUser => users::update_user(),
            Self::DeleteUser => users::delete_user(),

            Self::GetBasicSummary => summary::get_basic_summary(),
            Self::GetChartAccountOverview => summary::get_chart_account_overview(),
        }
    }
}

lazy_static! {
    // Indexed by `RouteId as usize`; built in declaration order.
    static ref CATALOG: Vec<Route> = RouteId::iter().map(RouteId::define).collect();
}

/// Returns every shipped route.
pub fn catalog() -> &'static [Route] {
    &CATALOG
}

/// Locates the route serving `method` on a concrete `path`.
///
/// When several templates match, the one with the most literal segments
/// wins, so `/v1/currencies/default` resolves to `getDefaultCurrency`.
pub fn find(method: RestMethod, path: &str) -> Option<&'static Route> {
    CATALOG
        .iter()
        .filter(|route| route.method == method)
        .filter_map(|route| route.match_path(path).map(|score| (score, route)))
        .max_by_key(|(score, _)| *score)
        .map(|(_, route)| route)
}

/// Returns the ids of every route in `resource`.
pub fn resource_routes(resource: &str) -> Vec<RouteId> {
    RouteId::iter()
        .filter(|id| id.route().resource == resource)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use firefly_define::ApiResponse;
    use std::collections::HashSet;
    use std::str::FromStr;

    #[test]
    fn every_id_maps_to_its_route() {
        for id in RouteId::iter() {
            assert_eq!(id.route().id, id.to_string(), "mismatch for {id:?}");
        }
        assert_eq!(catalog().len(), RouteId::COUNT);
    }

    #[test]
    fn ids_parse_back() {
        for route in catalog() {
            assert!(RouteId::from_str(&route.id).is_ok(), "{} does not parse", route.id);
        }
    }

    #[test]
    fn method_and_path_are_unique() {
        let mut seen = HashSet::new();
        for route in catalog() {
            assert!(
                seen.insert((route.method, route.path.as_str())),
                "duplicate {} {}",
                route.method,
                route.path
            );
        }
    }

    #[test]
    fn paths_are_versioned_and_use_braces() {
        for route in catalog() {
            assert!(route.path.starts_with("/v1/"), "{}", route.path);
            assert!(!route.path.contains(':'), "{}", route.path);
        }
    }

    #[test]
    fn read_routes_answer_json_api() {
        for route in catalog() {
            let is_listing = route.method == RestMethod::Get
                && (route.id.starts_with("list") || route.id.starts_with("search"));
            if is_listing {
                assert_eq!(
                    route.success_media_type(),
                    Some("application/vnd.api+json"),
                    "{}",
                    route.id
                );
            }
        }
    }

    #[test]
    fn bodies_only_on_write_methods() {
        for route in catalog() {
            if route.request.is_some() {
                assert!(route.method.allows_body(), "{}", route.id);
            }
        }
    }

    #[test]
    fn every_route_declares_a_response() {
        for route in catalog() {
            assert!(!route.responses.is_empty(), "{}", route.id);
        }
    }

    #[test]
    fn find_prefers_literal_segments() {
        assert_eq!(
            find(RestMethod::Get, "/v1/currencies/default").map(|r| r.id.as_str()),
            Some("getDefaultCurrency")
        );
        assert_eq!(
            find(RestMethod::Get, "/v1/currencies/EUR").map(|r| r.id.as_str()),
            Some("getCurrency")
        );
        assert_eq!(
            find(RestMethod::Post, "/v1/currencies/EUR/enable").map(|r| r.id.as_str()),
            Some("enableCurrency")
        );
    }

    #[test]
    fn find_respects_method() {
        assert_eq!(
            find(RestMethod::Delete, "/v1/accounts/42").map(|r| r.id.as_str()),
            Some("deleteAccount")
        );
        assert!(find(RestMethod::Patch, "/v1/accounts/42").is_none());
        assert!(find(RestMethod::Get, "/v2/accounts").is_none());
    }

    #[test]
    fn resource_groups_partition_the_catalog() {
        let groups = [
            "about",
            "accounts",
            "attachments",
            "autocomplete",
            "bills",
            "budgets",
            "categories",
            "configuration",
            "currencies",
            "data",
            "links",
            "piggy_banks",
            "preferences",
            "recurrences",
            "rule_groups",
            "rules",
            "search",
            "summary",
            "tags",
            "transactions",
            "users",
            "webhooks",
        ];
        let total: usize = groups.iter().map(|g| resource_routes(g).len()).sum();
        assert_eq!(total, RouteId::COUNT);
        assert_eq!(resource_routes("search").len(), 2);
        assert_eq!(resource_routes("links").len(), 11);
    }

    #[test]
    fn special_bodies() {
        assert!(
            RouteId::DownloadAttachment
                .route()
                .responses
                .get(200)
                .is_some_and(ApiResponse::is_binary)
        );
        assert!(
            RouteId::ExportTransactions
                .route()
                .responses
                .get(200)
                .is_some_and(ApiResponse::is_text)
        );
        assert_eq!(
            RouteId::SetConfiguration
                .route()
                .request
                .as_ref()
                .map(|r| r.content_type()),
            Some("application/x-www-form-urlencoded")
        );
    }
}
