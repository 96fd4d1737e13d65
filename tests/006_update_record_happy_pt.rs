#![forbid(unsafe_code)]

use solana_program_test::*;
use solana_sdk::{
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};

use record_store::{instruction as record_ix, state::Record};

async fn send_tx(
    ctx: &mut ProgramTestContext,
    ixs: Vec<Instruction>,
    extra_signers: &[&Keypair],
) {
    let payer_pk = ctx.payer.pubkey();
    let mut tx = Transaction::new_with_payer(&ixs, Some(&payer_pk));
    let bh = ctx.banks_client.get_latest_blockhash().await.unwrap();

    let mut signers: Vec<&Keypair> = Vec::with_capacity(1 + extra_signers.len());
    signers.push(&ctx.payer);
    signers.extend_from_slice(extra_signers);

    tx.sign(&signers, bh);
    ctx.banks_client.process_transaction(tx).await.unwrap();
}

async fn fetch_record(ctx: &mut ProgramTestContext, address: &Pubkey) -> Record {
    let acc = ctx.banks_client.get_account(*address).await.unwrap().unwrap();
    assert_eq!(acc.owner, record_store::id());
    Record::unpack(&acc.data).unwrap()
}

async fn cell_size(ctx: &mut ProgramTestContext, address: &Pubkey) -> usize {
    let acc = ctx.banks_client.get_account(*address).await.unwrap().unwrap();
    acc.data.len()
}

#[tokio::test]
async fn update_record_grow_and_shrink_program_test() {
    let program_id = record_store::id();

    let pt = ProgramTest::new(
        "record_store",
        program_id,
        processor!(record_store::entrypoint::process_instruction),
    );

    let mut ctx = pt.start_with_context().await;

    let author_pk = ctx.payer.pubkey();
    let record = Keypair::new();

    let ix = record_ix::create_record(
        &program_id,
        &record.pubkey(),
        &author_pk,
        &author_pk,
        "veganism",
        "Hummus, am I right?",
    )
    .unwrap();
    send_tx(&mut ctx, vec![ix], &[&record]).await;

    let before = fetch_record(&mut ctx, &record.pubkey()).await;
    let size_before = cell_size(&mut ctx, &record.pubkey()).await;

    // Grow: the new content is much longer, so the cell is reallocated and
    // topped up to stay rent-exempt.
    let long_content = "chickpeas ".repeat(25); // 250 bytes
    let ix = record_ix::update_record(
        &program_id,
        &record.pubkey(),
        &author_pk,
        "legumes",
        &long_content,
    )
    .unwrap();
    send_tx(&mut ctx, vec![ix], &[]).await;

    let grown = fetch_record(&mut ctx, &record.pubkey()).await;
    assert_eq!(grown.topic, "legumes");
    assert_eq!(grown.content, long_content);
    assert_eq!(grown.author, before.author);
    assert_eq!(grown.timestamp, before.timestamp);
    let size_grown = cell_size(&mut ctx, &record.pubkey()).await;
    assert!(size_grown > size_before);
    assert_eq!(size_grown, grown.encoded_len());

    // Shrink: the cell is reallocated down to the exact new encoding.
    let ix = record_ix::update_record(&program_id, &record.pubkey(), &author_pk, "", "Hummus.")
        .unwrap();
    send_tx(&mut ctx, vec![ix], &[]).await;

    let shrunk = fetch_record(&mut ctx, &record.pubkey()).await;
    assert_eq!(shrunk.topic, "");
    assert_eq!(shrunk.content, "Hummus.");
    assert_eq!(shrunk.author, before.author);
    assert_eq!(shrunk.timestamp, before.timestamp);
    let size_shrunk = cell_size(&mut ctx, &record.pubkey()).await;
    assert_eq!(size_shrunk, shrunk.encoded_len());
    assert!(size_shrunk < size_grown);
}

#[tokio::test]
async fn update_record_same_size_program_test() {
    let program_id = record_store::id();

    let pt = ProgramTest::new(
        "record_store",
        program_id,
        processor!(record_store::entrypoint::process_instruction),
    );

    let mut ctx = pt.start_with_context().await;

    let author_pk = ctx.payer.pubkey();
    let record = Keypair::new();

    let ix = record_ix::create_record(
        &program_id,
        &record.pubkey(),
        &author_pk,
        &author_pk,
        "veganism",
        "Hummus, am I right?",
    )
    .unwrap();
    send_tx(&mut ctx, vec![ix], &[&record]).await;

    let before = fetch_record(&mut ctx, &record.pubkey()).await;
    let size_before = cell_size(&mut ctx, &record.pubkey()).await;

    // Same total byte length, rewritten in place.
    let ix = record_ix::update_record(
        &program_id,
        &record.pubkey(),
        &author_pk,
        "stoicism",
        "Hummus, am I wrong?",
    )
    .unwrap();
    send_tx(&mut ctx, vec![ix], &[]).await;

    let after = fetch_record(&mut ctx, &record.pubkey()).await;
    assert_eq!(after.topic, "stoicism");
    assert_eq!(after.content, "Hummus, am I wrong?");
    assert_eq!(after.author, before.author);
    assert_eq!(after.timestamp, before.timestamp);
    assert_eq!(cell_size(&mut ctx, &record.pubkey()).await, size_before);
}
