//! # Record Derivation
//!
//! Turns provider-service payloads into table records for one provider.
//!
//! - Rewards belong to a provider when the reward's `name` is the provider's
//!   name.
//! - A transaction belongs to a provider when the provider received the input
//!   leg (`receiver` is its address on `network`) or sent the output leg
//!   (`sender` is its address on `outputNetwork`).
//! - Balances and pairs come straight from the provider record, in symbol
//!   order.

use shared::dto::{ProviderDto, RewardDto, SwapTransactionDto};

use crate::model::Record;

/// Rewards earned by `provider`, in feed order.
pub fn reward_records(rewards: &[RewardDto], provider: &str) -> Vec<Record> {
    rewards
        .iter()
        .filter(|r| r.name == provider)
        .map(|r| {
            let mut record = Record::new();
            record.insert_text("name", &r.name);
            record.insert_amount("usd", &r.usd);
            record.insert_text("network", &r.network);
            record.insert_amount("reward", &r.reward);
            record.insert_text("outputNetwork", &r.output_network);
            record.insert_text("date", &r.date);
            record
        })
        .collect()
}

/// Swaps that went through `provider`, in feed order.
pub fn transaction_records(txs: &[SwapTransactionDto], provider: &ProviderDto) -> Vec<Record> {
    let owns = |asset: &str, address: &str| {
        provider
            .address_for(asset)
            .is_some_and(|own| !own.is_empty() && own == address)
    };

    txs.iter()
        .filter(|tx| owns(&tx.network, &tx.receiver) || owns(&tx.output_network, &tx.sender))
        .map(transaction_record)
        .collect()
}

fn transaction_record(tx: &SwapTransactionDto) -> Record {
    let mut record = Record::new();
    record.insert_text("transactionHash", &tx.transaction_hash);
    record.insert("pair", tx.pair());
    record.insert_text("network", &tx.network);
    record.insert_text("outputNetwork", &tx.output_network);
    record.insert_amount("status", &tx.status);
    record.insert_amount("blockNumber", &tx.block_number);
    record.insert_amount("expiration", &tx.expiration);
    record.insert_text("sender", &tx.sender);
    record.insert_text("receiver", &tx.receiver);
    record.insert_text("outputAddress", &tx.output_address);
    record.insert_amount("inputAmountNum", &tx.input_amount_num);
    record.insert_amount("outputAmountNum", &tx.output_amount_num);
    if let Some(hash) = &tx.completeness_transaction_hash {
        record.insert_text("completenessTransactionHash", hash);
    }
    record
}

/// One `{asset, address, balance}` record per held asset.
pub fn balance_records(provider: &ProviderDto) -> Vec<Record> {
    provider
        .balances
        .iter()
        .map(|(asset, b)| {
            let mut record = Record::new().with("asset", asset.as_str());
            record.insert_text("address", &b.address);
            record.insert_amount("balance", &b.balance);
            record
        })
        .collect()
}

/// One `{pair, fee, price}` record per supported pair.
pub fn pair_records(provider: &ProviderDto) -> Vec<Record> {
    provider
        .pairs
        .iter()
        .map(|(pair, p)| {
            let mut record = Record::new().with("pair", pair.as_str());
            record.insert_amount("fee", &p.fee);
            record.insert_amount("price", &p.price);
            record
        })
        .collect()
}
