//! Sample data for local development.

use anken_core::error::CoreError;
use anken_core::status::AnkenStatus;

use crate::models::account::CreateAccount;
use crate::models::anken::CreateAnken;
use crate::models::contact::CreateContact;
use crate::repositories::{AccountRepo, AnkenRepo, ContactRepo};
use crate::MemStore;

/// Populate `store` with two accounts, one contact each, and two projects.
pub async fn load_sample_data(store: &MemStore) -> Result<(), CoreError> {
    let sample = AccountRepo::create(
        store,
        CreateAccount {
            account_name: "株式会社サンプル".into(),
        },
    )
    .await;
    let technology = AccountRepo::create(
        store,
        CreateAccount {
            account_name: "テクノロジー株式会社".into(),
        },
    )
    .await;

    let tanaka = ContactRepo::create(
        store,
        CreateContact {
            contact_name: "田中太郎".into(),
            account_id: sample.id,
        },
    )
    .await?;
    let sato = ContactRepo::create(
        store,
        CreateContact {
            contact_name: "佐藤花子".into(),
            account_id: technology.id,
        },
    )
    .await?;

    AnkenRepo::create(
        store,
        CreateAnken {
            name: Some("Webアプリケーション開発".into()),
            contact_id: Some(tanaka.contact.id),
            detail: Some("ECサイトの構築プロジェクト".into()),
            status: Some(AnkenStatus::InProgress.id()),
            start_date: Some("2024-01-01".into()),
            end_date: Some("2024-06-30".into()),
            price: Some("¥5,000,000".into()),
            ..Default::default()
        },
    )
    .await;
    AnkenRepo::create(
        store,
        CreateAnken {
            name: Some("モバイルアプリ開発".into()),
            contact_id: Some(sato.contact.id),
            detail: Some("iOS/Androidアプリの開発".into()),
            status: Some(AnkenStatus::New.id()),
            start_date: Some("2024-03-01".into()),
            end_date: Some("2024-12-31".into()),
            price: Some("¥8,000,000".into()),
            ..Default::default()
        },
    )
    .await;

    tracing::info!("Sample data loaded");
    Ok(())
}
