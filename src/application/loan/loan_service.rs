use crate::domain::{self, commands::*, eligibility, value_objects::*};
use crate::domain::loan::{ActiveLoan, ClosedLoan, Loan};
use crate::ports::*;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::errors::{LoanServiceError, Result};

/// ISBN単位の直列化ロック
///
/// borrow/returnのread-check-write列は同一書籍に対して直列化する
/// （残り1冊に対する二重貸出の防止）。異なる書籍の操作は並行に進んでよい。
///
/// エントリは回収しないが、カタログの冊数までしか増えない。
pub struct BookLocks {
    locks: Mutex<HashMap<Isbn, Arc<tokio::sync::Mutex<()>>>>,
}

impl BookLocks {
    pub fn new() -> Self {
        Self {
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// ISBNに対応するガードを取得する
    async fn acquire(&self, isbn: &Isbn) -> tokio::sync::OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().unwrap();
            Arc::clone(
                locks
                    .entry(isbn.clone())
                    .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(()))),
            )
        };
        lock.lock_owned().await
    }
}

impl Default for BookLocks {
    fn default() -> Self {
        Self::new()
    }
}

/// サービスの依存関係
///
/// ストアのハンドルは明示的に構築して渡す。隠れたグローバルは持たない
/// （プロセス起動時に開き、シャットダウンで閉じる）。
#[derive(Clone)]
pub struct ServiceDependencies {
    pub book_store: Arc<dyn BookStore>,
    pub member_store: Arc<dyn MemberStore>,
    pub loan_store: Arc<dyn LoanStore>,
    pub book_locks: Arc<BookLocks>,
}

impl ServiceDependencies {
    pub fn new(
        book_store: Arc<dyn BookStore>,
        member_store: Arc<dyn MemberStore>,
        loan_store: Arc<dyn LoanStore>,
    ) -> Self {
        Self {
            book_store,
            member_store,
            loan_store,
            book_locks: Arc::new(BookLocks::new()),
        }
    }
}

/// 書籍を貸し出す
///
/// ビジネスルール：
/// - 会員が存在し、有効であること
/// - 書籍が存在し、貸出可能であること
/// - 会員のActiveな貸出冊数が上限（3冊）未満であること
///
/// 書籍のavailable反転と貸出レコードの作成は論理的に1トランザクション。
/// ISBN単位のロック内で実行し、貸出の保存に失敗した場合はavailableを
/// 復元してからエラーを返す。失敗時に部分的な状態は呼び出し側から
/// 観測されない。
pub async fn borrow_book(deps: &ServiceDependencies, cmd: BorrowBook) -> Result<ActiveLoan> {
    let _guard = deps.book_locks.acquire(&cmd.isbn).await;

    // 1. 書籍・会員・貸出冊数を解決
    let book = deps
        .book_store
        .find_by_isbn(&cmd.isbn)
        .await
        .map_err(LoanServiceError::BookStoreError)?;

    let member = deps
        .member_store
        .find_by_id(cmd.member_id)
        .await
        .map_err(LoanServiceError::MemberStoreError)?;

    let active_count = deps
        .loan_store
        .count_active_for_member(cmd.member_id)
        .await
        .map_err(LoanServiceError::LoanStoreError)?;

    // 2. 適格性チェック（失敗は型付きエラーとしてそのまま伝播）
    eligibility::check_eligibility(member.as_ref(), active_count, book.as_ref())?;

    // チェックを通過した時点で書籍は必ず存在する
    let mut book = book.ok_or(LoanServiceError::BookUnavailable)?;

    // 3. 先に書籍を貸出不可へ反転し、貸出の保存に失敗したら復元する
    book.check_out();
    deps.book_store
        .update(&book)
        .await
        .map_err(LoanServiceError::BookStoreError)?;

    let loan = domain::loan::open_loan(cmd.isbn, cmd.member_id, cmd.borrowed_on);

    if let Err(err) = deps.loan_store.save(&loan).await {
        // 補償：availableを復元する。復元の失敗より元のエラーを優先する
        book.check_in();
        let _ = deps.book_store.update(&book).await;
        return Err(LoanServiceError::LoanStoreError(err));
    }

    Ok(loan)
}

/// 書籍を返却する
///
/// ビジネスルール：
/// - 書籍が存在すること
/// - 会員が存在すること（無効化された会員の返却も受け付ける）
/// - この書籍とこの会員に対するActiveな貸出が存在すること
/// - 延滞料金は返却予定日と返却日から計算し、Closedな貸出に記録する
///
/// 貸出のClose反映と書籍のavailable復帰は論理的に1トランザクション。
/// 書籍の更新に失敗した場合は貸出をActiveに書き戻して不変条件を守る。
pub async fn return_book(deps: &ServiceDependencies, cmd: ReturnBook) -> Result<ClosedLoan> {
    let _guard = deps.book_locks.acquire(&cmd.isbn).await;

    // 1. 書籍と会員を解決。不存在と無効は区別し、不存在をMemberInactiveと
    //    報告しない
    let mut book = deps
        .book_store
        .find_by_isbn(&cmd.isbn)
        .await
        .map_err(LoanServiceError::BookStoreError)?
        .ok_or(LoanServiceError::BookUnavailable)?;

    deps.member_store
        .find_by_id(cmd.member_id)
        .await
        .map_err(LoanServiceError::MemberStoreError)?
        .ok_or(LoanServiceError::MemberNotFound)?;

    // 2. この書籍のActiveな貸出を検索し、会員が一致することを確認
    let active = deps
        .loan_store
        .find_active_by_isbn(&cmd.isbn)
        .await
        .map_err(LoanServiceError::LoanStoreError)?
        .filter(|loan| loan.member_id == cmd.member_id)
        .ok_or(LoanServiceError::LoanNotFound)?;

    // 3. 延滞料金を計算して貸出を閉じる
    let reopen = active.clone();
    let closed = domain::loan::close_loan(active, cmd.returned_on)?;

    deps.loan_store
        .update(&Loan::Closed(closed.clone()))
        .await
        .map_err(LoanServiceError::LoanStoreError)?;

    // 4. 書籍を貸出可能に戻す。失敗したら貸出をActiveに書き戻す
    book.check_in();
    if let Err(err) = deps.book_store.update(&book).await {
        let _ = deps.loan_store.update(&Loan::Active(reopen)).await;
        return Err(LoanServiceError::BookStoreError(err));
    }

    Ok(closed)
}

/// 延滞中の貸出を一覧する
///
/// 呼び出しごとにLoanStoreから新しいスナップショットを取得する（再実行可能）。
/// `due_on < today`（厳密に前）のActiveな貸出のみを返し、Closedな貸出は
/// 過去に延滞していても含めない。貸出は変更しない。
pub async fn list_overdue_loans(
    deps: &ServiceDependencies,
    today: NaiveDate,
) -> Result<Vec<ActiveLoan>> {
    let loans = deps
        .loan_store
        .find_all()
        .await
        .map_err(LoanServiceError::LoanStoreError)?;

    Ok(loans
        .into_iter()
        .filter_map(|loan| match loan {
            Loan::Active(active) if domain::loan::is_overdue(&active, today) => Some(active),
            _ => None,
        })
        .collect())
}
