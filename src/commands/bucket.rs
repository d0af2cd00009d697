use crate::api::endpoints::CREATE_BUCKET;
use crate::api::request::AdminRequest;
use crate::cli::BucketArgs;
use crate::commands::required;
use crate::error::CommandError;
use crate::output::Line;
use crate::session::Session;

pub async fn create(session: &Session, args: &BucketArgs) -> Line {
    session
        .submit(
            &args.conn,
            |_| create_request(args),
            |target| {
                format!(
                    "Created {} bucket on node {}",
                    args.name.as_deref().unwrap_or_default().trim(),
                    target.host
                )
            },
        )
        .await
}

fn create_request(args: &BucketArgs) -> Result<AdminRequest, CommandError> {
    let name = required(&args.name, "-n")?;
    // A bucket without SASL auth is reachable only through its own port.
    if args.auth == "none" && args.dedicated.is_none() {
        return Err(CommandError::MissingOption("-d"));
    }

    Ok(AdminRequest::new(&CREATE_BUCKET)
        .field("name", name)
        .field("ramQuotaMB", args.memory)
        .field("bucketType", &args.bucket_type)
        .field("evictionPolicy", &args.eviction)
        .field("replicaNumber", args.replicas)
        .field("replicaIndex", args.index)
        .field("flushEnabled", args.flush)
        .field("authType", &args.auth)
        .optional_field("saslPassword", args.saslpass.as_deref())
        .field("threadsNumber", args.wthreads)
        .field("autoCompaction", args.compaction)
        .optional_field("proxyPort", args.dedicated))
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::cli::{ClusterCommand, ShellCommand, ShellLine};
    use crate::commands::testing;

    fn bucket_args(words: &[&str]) -> BucketArgs {
        let mut line = vec!["bckt"];
        line.extend_from_slice(words);
        match ShellLine::try_parse_from(line).unwrap().command {
            ShellCommand::Cluster(ClusterCommand::Bckt(args)) => args,
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn default_bucket_form() {
        let req = create_request(&bucket_args(&["-n", "beer-sample"])).unwrap();
        assert_eq!(req.endpoint.path, "/pools/default/buckets");
        assert_eq!(
            req.form,
            vec![
                ("name", "beer-sample".to_string()),
                ("ramQuotaMB", "128".to_string()),
                ("bucketType", "membase".to_string()),
                ("evictionPolicy", "valueOnly".to_string()),
                ("replicaNumber", "1".to_string()),
                ("replicaIndex", "0".to_string()),
                ("flushEnabled", "0".to_string()),
                ("authType", "sasl".to_string()),
                ("threadsNumber", "3".to_string()),
                ("autoCompaction", "0".to_string()),
            ]
        );
    }

    #[test]
    fn explicit_bucket_flags() {
        let args = bucket_args(&[
            "-n", "cache", "-m", "512", "-t", "memcached", "-e", "fullEviction", "-r", "2",
            "-f", "1", "-a", "none", "-d", "11212", "-w", "8",
        ]);
        let req = create_request(&args).unwrap();
        assert_eq!(req.get("ramQuotaMB"), Some("512"));
        assert_eq!(req.get("bucketType"), Some("memcached"));
        assert_eq!(req.get("evictionPolicy"), Some("fullEviction"));
        assert_eq!(req.get("replicaNumber"), Some("2"));
        assert_eq!(req.get("flushEnabled"), Some("1"));
        assert_eq!(req.get("authType"), Some("none"));
        assert_eq!(req.get("proxyPort"), Some("11212"));
        assert_eq!(req.get("threadsNumber"), Some("8"));
        assert_eq!(req.get("saslPassword"), None);
    }

    #[test]
    fn name_is_required() {
        let err = create_request(&bucket_args(&[])).unwrap_err();
        assert_eq!(err.to_string(), "-n option required");
    }

    #[test]
    fn authless_bucket_needs_dedicated_port() {
        let err = create_request(&bucket_args(&["-n", "open", "-a", "none"])).unwrap_err();
        assert_eq!(err.to_string(), "-d option required");
    }

    #[tokio::test]
    async fn accepted_creation_is_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pools/default/buckets"))
            .respond_with(ResponseTemplate::new(202))
            .expect(1)
            .mount(&server)
            .await;

        let mut args = bucket_args(&["-n", "beer"]);
        args.conn = testing::conn(&server);
        let host = args.conn.host.clone().unwrap();

        let line = create(&testing::session(), &args).await;
        assert_eq!(
            line,
            Line::Success(format!("Created beer bucket on node {}", host))
        );
    }

    #[tokio::test]
    async fn rejected_creation_shows_clean_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/pools/default/buckets"))
            .respond_with(ResponseTemplate::new(400).set_body_string(
                r#"{"errors":{"ramQuotaMB":"RAM quota cannot be less than 100 MB"}}"#,
            ))
            .mount(&server)
            .await;

        let mut args = bucket_args(&["-n", "beer", "-m", "64"]);
        args.conn = testing::conn(&server);

        let line = create(&testing::session(), &args).await;
        assert_eq!(
            line,
            Line::Error("400 {errors:{ramQuotaMB:RAM quota cannot be less than 100 MB}}".to_string())
        );
    }
}
