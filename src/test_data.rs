#[cfg(test)]
pub const POST_DATA: &str = r##"+++
title = "What I learned after 20+ years of software development"
date = "2022-04-02"
description = "How to be a great software engineer?"
+++

How to be a great software engineer?

Someone asked me this question today and I didn't have an answer. After thinking for a while, I came up with a list of what I try to do myself.

## Non technical

### Have a honest image of yourself

You finished university and learned a lot. You solved many hard problems.
It's common to think you are awesome and the smartest person in the planet.
Some day in your life, you will find that there are many developers much better than you. Not in capacity, but in wisdom and knowledge. **The earlier you find that, the better.**
"##;

#[cfg(test)]
pub const POST_DATA_NO_HEADER: &str = r##"# Raw notes

A file that was dropped into the content directory without any metadata
block. It still has to render, just with empty fields.
"##;
