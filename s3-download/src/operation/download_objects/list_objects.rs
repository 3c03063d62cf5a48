/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;

use crate::error;

use super::DownloadObjectsContext;

/// Paginator for the `ListObjectsV2` operation.
///
/// Pages are fetched lazily and sequentially. The listing is exhausted when a
/// page is not truncated or carries no continuation token.
#[derive(Debug)]
pub(super) struct ListObjectsPaginator {
    context: DownloadObjectsContext,
    state: Option<State>,
}

#[derive(Debug, PartialEq)]
enum State {
    Paginating { next_token: Option<String> },
    Done,
}

impl State {
    fn next_state(self, output: &ListObjectsV2Output) -> State {
        let is_truncated =
            output.is_truncated().unwrap_or(false) && output.next_continuation_token().is_some();

        match self {
            State::Paginating { .. } if is_truncated => State::Paginating {
                next_token: output.next_continuation_token.to_owned(),
            },
            State::Paginating { .. } => State::Done,
            State::Done => State::Done,
        }
    }
}

impl ListObjectsPaginator {
    pub(super) fn new(context: DownloadObjectsContext) -> Self {
        Self {
            context,
            state: Some(State::Paginating { next_token: None }),
        }
    }

    /// Fetch the next page of results, or `None` once the listing is exhausted.
    pub(super) async fn next_page(
        &mut self,
    ) -> Option<Result<ListObjectsV2Output, error::Error>> {
        let next_token = match self.state.as_ref().expect("valid state") {
            State::Done => return None,
            State::Paginating { next_token } => next_token.clone(),
        };

        let input = &self.context.state.input;
        let list_result = self
            .context
            .client()
            .list_objects_v2()
            .bucket(input.bucket().expect("bucket set"))
            .prefix(input.source())
            .set_continuation_token(next_token)
            .send()
            .await;

        match list_result {
            Ok(output) => {
                let prev_state = self.state.take().expect("state set");
                let next_state = prev_state.next_state(&output);
                self.state.replace(next_state);
                Some(Ok(output))
            }
            Err(err) => Some(Err(err.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use aws_sdk_s3::operation::list_objects_v2::ListObjectsV2Output;
    use aws_sdk_s3::types::Object;

    use super::State;

    fn list_resp(next_token: Option<&'static str>, keys: Vec<&'static str>) -> ListObjectsV2Output {
        let contents = keys.iter().map(|k| Object::builder().key(*k).build()).collect();
        ListObjectsV2Output::builder()
            .is_truncated(next_token.is_some())
            .set_next_continuation_token(next_token.map(str::to_owned))
            .set_contents(Some(contents))
            .build()
    }

    #[test]
    fn test_next_state() {
        let start = State::Paginating { next_token: None };

        let output1 = list_resp(Some("token1"), vec!["k1", "k2"]);
        let output2 = list_resp(Some("token2"), vec!["k3"]);
        let output3 = list_resp(None, vec!["k4", "k5"]);

        let state2 = start.next_state(&output1);
        assert_eq!(
            state2,
            State::Paginating {
                next_token: Some("token1".to_owned()),
            }
        );

        let state3 = state2.next_state(&output2);
        assert_eq!(
            state3,
            State::Paginating {
                next_token: Some("token2".to_owned()),
            }
        );

        let state4 = state3.next_state(&output3);
        assert_eq!(state4, State::Done);
    }

    #[test]
    fn test_single_page_listing() {
        let start = State::Paginating { next_token: None };
        let output = list_resp(None, vec!["k1"]);
        assert_eq!(State::Done, start.next_state(&output));
    }

    #[test]
    fn test_truncated_without_token_terminates() {
        // a service that marks a page truncated but returns no token must not loop
        let output = ListObjectsV2Output::builder().is_truncated(true).build();
        let start = State::Paginating { next_token: None };
        assert_eq!(State::Done, start.next_state(&output));
    }
}
