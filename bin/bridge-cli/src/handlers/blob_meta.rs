use anyhow::Result;
use rollup_bridge_da::BlobMeta;

use crate::cli::BlobMetaArgs;

pub(crate) fn handle_blob_meta(args: BlobMetaArgs) -> Result<()> {
    let BlobMetaArgs {
        versioned_hash,
        index,
        packed,
    } = args;

    println!("0x{}", encode_meta(&BlobMeta::new(versioned_hash, index), packed));

    Ok(())
}

fn encode_meta(meta: &BlobMeta, packed: bool) -> String {
    if packed {
        hex::encode(meta.encode_packed())
    } else {
        hex::encode(meta.encode())
    }
}
