//! Live AWS tests. These need real credentials and an existing bucket.

#[cfg(test)]
mod tests {
    use gantry_core::ServiceDeployer;
    use gantry_s3_import::S3ImportService;

    use crate::import_context;

    const BUCKET_ENV: &str = "GANTRY_IMPORT_TEST_BUCKET";

    #[tokio::test]
    #[ignore = "requires AWS credentials and an existing bucket named in GANTRY_IMPORT_TEST_BUCKET"]
    async fn test_should_import_live_bucket() {
        crate::init_tracing();
        let bucket = std::env::var(BUCKET_ENV)
            .unwrap_or_else(|_| panic!("set {BUCKET_ENV} to an existing bucket name"));

        let service = S3ImportService::from_env().await;
        let ctx = import_context("live-import", serde_json::json!({ "bucket_name": bucket }));

        let outputs = service
            .deploy(&ctx, &[])
            .await
            .expect("deploy should find the bucket");

        tracing::info!(bucket = %bucket, "imported live bucket");
        assert_eq!(outputs.env_vars["BUCKET_NAME"], bucket);
        assert_eq!(
            outputs.env_vars["BUCKET_ARN"],
            format!("arn:aws:s3:::{bucket}")
        );
    }

    #[tokio::test]
    #[ignore = "requires AWS credentials"]
    async fn test_should_fail_live_deploy_for_missing_bucket() {
        crate::init_tracing();
        let service = S3ImportService::from_env().await;
        let bucket = crate::test_bucket_name("never-created");
        let ctx = import_context("live-import", serde_json::json!({ "bucket_name": bucket }));

        let err = service.deploy(&ctx, &[]).await.unwrap_err();
        assert_eq!(err.to_string(), format!("cannot find bucket named {bucket}"));
    }
}
