use std::io::ErrorKind;
use std::path::PathBuf;
use std::{fs, io};

use spdlog::warn;

use crate::content::Post;

/// A directory of markdown files, one file per post. The file name minus
/// the `.md` extension is the post's public identifier.
///
/// Every call reads from the filesystem again. Content is small and rarely
/// requested, so there is no cache to keep consistent.
pub struct PostStore {
    root_dir: PathBuf,
}

impl PostStore {
    pub fn new(root_dir: PathBuf) -> Self {
        PostStore { root_dir }
    }

    pub fn list_slugs(&self) -> io::Result<Vec<String>> {
        let mut slugs = vec![];
        let entries = fs::read_dir(self.root_dir.as_path())?;
        for entry in entries {
            if let Ok(entry) = entry {
                if let Ok(file_type) = entry.file_type() {
                    if !file_type.is_file() {
                        continue;
                    }
                    let file_name = entry.file_name();
                    if let Some(file_name) = file_name.to_str() {
                        if let Some(slug) = file_name.strip_suffix(".md") {
                            slugs.push(slug.to_string());
                        }
                    }
                }
            }
        }
        Ok(slugs)
    }

    pub fn load(&self, slug: &str) -> io::Result<Post> {
        // A slug is a bare file stem. Anything that walks the tree is
        // indistinguishable from a post that does not exist.
        if slug.contains('/') || slug.contains('\\') || slug.contains("..") {
            return Err(Self::not_found(slug));
        }

        let path = self.root_dir.join(format!("{}.md", slug));
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(Self::not_found(slug)),
            Err(e) => return Err(e),
        };

        Ok(Post::from_string(slug, &raw))
    }

    pub fn load_all(&self) -> io::Result<Vec<Post>> {
        let mut posts = vec![];
        for slug in self.list_slugs()? {
            match self.load(&slug) {
                Ok(post) => posts.push(post),
                Err(e) => warn!("Skipping unreadable post {}: {}", slug, e),
            }
        }
        Ok(posts)
    }

    fn not_found(slug: &str) -> io::Error {
        io::Error::new(ErrorKind::NotFound, format!("No post named {}", slug))
    }
}
